// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Scalar converters between raw record values and field values.
//!
//! A [`Codec`] is the default conversion applied to an attribute when no
//! custom converter pair is supplied. Decoding is fallible (the raw value
//! may have the wrong shape); encoding is total.

use crate::error::Error;
use crate::record::{value_kind, Value};

/// Conversion between a raw record value and a typed field value.
pub trait Codec: Sized {
    /// Interprets the raw value found under the field's wire key.
    fn decode(raw: &Value) -> Result<Self, Error>;

    /// Produces the raw value to store under the field's wire key.
    fn encode(&self) -> Value;
}

/// The pass-through converter: a field typed as [`Value`] keeps whatever
/// the record held, unchanged in both directions.
impl Codec for Value {
    fn decode(raw: &Value) -> Result<Self, Error> {
        Ok(raw.clone())
    }

    fn encode(&self) -> Value {
        self.clone()
    }
}

impl Codec for bool {
    fn decode(raw: &Value) -> Result<Self, Error> {
        raw.as_bool()
            .ok_or_else(|| Error::unexpected_type("boolean", value_kind(raw)))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl Codec for String {
    fn decode(raw: &Value) -> Result<Self, Error> {
        raw.as_str()
            .map(str::to_owned)
            .ok_or_else(|| Error::unexpected_type("string", value_kind(raw)))
    }

    fn encode(&self) -> Value {
        Value::from(self.clone())
    }
}

macro_rules! impl_codec_signed {
    ($($ty:ty),*) => {
        $(impl Codec for $ty {
            fn decode(raw: &Value) -> Result<Self, Error> {
                let n = raw
                    .as_i64()
                    .ok_or_else(|| Error::unexpected_type("integer", value_kind(raw)))?;
                <$ty>::try_from(n).map_err(|_| {
                    Error::invalid_data(format!(
                        "integer {n} out of range for {}",
                        stringify!($ty)
                    ))
                })
            }

            fn encode(&self) -> Value {
                Value::from(*self)
            }
        })*
    };
}

macro_rules! impl_codec_unsigned {
    ($($ty:ty),*) => {
        $(impl Codec for $ty {
            fn decode(raw: &Value) -> Result<Self, Error> {
                let n = raw
                    .as_u64()
                    .ok_or_else(|| Error::unexpected_type("unsigned integer", value_kind(raw)))?;
                <$ty>::try_from(n).map_err(|_| {
                    Error::invalid_data(format!(
                        "integer {n} out of range for {}",
                        stringify!($ty)
                    ))
                })
            }

            fn encode(&self) -> Value {
                Value::from(*self)
            }
        })*
    };
}

impl_codec_signed!(i8, i16, i32, i64);
impl_codec_unsigned!(u8, u16, u32, u64);

impl Codec for f64 {
    fn decode(raw: &Value) -> Result<Self, Error> {
        raw.as_f64()
            .ok_or_else(|| Error::unexpected_type("number", value_kind(raw)))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl Codec for f32 {
    fn decode(raw: &Value) -> Result<Self, Error> {
        raw.as_f64()
            .map(|n| n as f32)
            .ok_or_else(|| Error::unexpected_type("number", value_kind(raw)))
    }

    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

/// `null` and `None` map to each other; any other raw value goes through
/// the inner codec.
impl<T: Codec> Codec for Option<T> {
    fn decode(raw: &Value) -> Result<Self, Error> {
        match raw {
            Value::Null => Ok(None),
            raw => T::decode(raw).map(Some),
        }
    }

    fn encode(&self) -> Value {
        match self {
            Some(value) => value.encode(),
            None => Value::Null,
        }
    }
}

impl<T: Codec> Codec for Vec<T> {
    fn decode(raw: &Value) -> Result<Self, Error> {
        let items = raw
            .as_array()
            .ok_or_else(|| Error::unexpected_type("array", value_kind(raw)))?;
        items.iter().map(T::decode).collect()
    }

    fn encode(&self) -> Value {
        Value::Array(self.iter().map(Codec::encode).collect())
    }
}
