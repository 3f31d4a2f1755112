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

use crate::error::Error;
use crate::record::{Record, Value};
use crate::schema::Schema;

/// A type that maps to and from generic records through a frozen,
/// per-type [`Schema`].
///
/// Implementations are normally generated by `#[derive(Model)]`; a
/// hand-written impl holds its schema in a `OnceLock` static so the field
/// list is built exactly once:
///
/// ```
/// use std::sync::OnceLock;
/// use remodel_core::field::Field;
/// use remodel_core::model::{Model, ModelDefault};
/// use remodel_core::schema::Schema;
///
/// #[derive(Default)]
/// struct Person {
///     name: String,
/// }
///
/// impl ModelDefault for Person {
///     fn model_default() -> Self {
///         Self::default()
///     }
/// }
///
/// impl Model for Person {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: OnceLock<Schema<Person>> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             Schema::builder()
///                 .field(Field::attribute(
///                     "name",
///                     |model: &Person| &model.name,
///                     |model: &mut Person, value| model.name = value,
///                 ))
///                 .build()
///         })
///     }
/// }
/// ```
pub trait Model: ModelDefault + Sized + 'static {
    /// The type's frozen schema. Built on first access and immutable
    /// thereafter; concurrent decode/encode calls share it freely.
    fn schema() -> &'static Schema<Self>;

    /// Decodes a record into a fresh instance.
    fn decode(record: &Record) -> Result<Self, Error> {
        Self::schema().decode(record)
    }

    /// Encodes this instance into a record.
    fn encode(&self) -> Record {
        Self::schema().encode(self)
    }
}

/// All-absent construction of a model or field value.
///
/// Decode starts from `model_default()` and overwrites each declared field
/// from the record; the same value is the base for named construction with
/// overrides (`Person { name: .., ..Person::model_default() }`).
///
/// This exists instead of a [`Default`] bound because polymorphic field
/// types are enums over payload-carrying variants, which cannot derive
/// `Default`. The derive macros generate impls field-wise for models and
/// first-variant for polymorphic enums.
pub trait ModelDefault {
    fn model_default() -> Self;
}

macro_rules! impl_model_default {
    ($($ty:ty),*) => {
        $(impl ModelDefault for $ty {
            fn model_default() -> Self {
                Self::default()
            }
        })*
    };
}

impl_model_default!(
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Record
);

impl ModelDefault for Value {
    fn model_default() -> Self {
        Value::Null
    }
}

impl<T> ModelDefault for Option<T> {
    fn model_default() -> Self {
        None
    }
}

impl<T> ModelDefault for Vec<T> {
    fn model_default() -> Self {
        Vec::new()
    }
}

impl<A: ModelDefault, B: ModelDefault> ModelDefault for (A, B) {
    fn model_default() -> Self {
        (A::model_default(), B::model_default())
    }
}

impl<A: ModelDefault, B: ModelDefault, C: ModelDefault> ModelDefault for (A, B, C) {
    fn model_default() -> Self {
        (A::model_default(), B::model_default(), C::model_default())
    }
}
