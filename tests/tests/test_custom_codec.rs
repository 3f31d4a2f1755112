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

use remodel_core::error::Error;
use remodel_core::model::Model;
use remodel_core::record::Record;
use remodel_derive::Model;
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    value.as_object().unwrap().clone()
}

/// A boolean stored as `0`/`1` on the wire.
mod int_bool {
    use remodel_core::error::Error;
    use remodel_core::record::{value_kind, Value};

    pub fn decode(raw: &Value) -> Result<bool, Error> {
        match raw.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            Some(n) => Err(Error::invalid_data(format!("expected 0 or 1, got {n}"))),
            None => Err(Error::unexpected_type("integer", value_kind(raw))),
        }
    }

    pub fn encode(value: &bool) -> Value {
        Value::from(i64::from(*value))
    }
}

/// A complex number stored as `{"real": .., "imaginary": ..}`.
mod complex_pair {
    use remodel_core::error::Error;
    use remodel_core::record::{as_record, Value};

    pub fn decode(raw: &Value) -> Result<(f64, f64), Error> {
        let pair = as_record(raw)?;
        let real = pair
            .get("real")
            .and_then(Value::as_f64)
            .ok_or_else(|| Error::missing_key("real"))?;
        let imaginary = pair
            .get("imaginary")
            .and_then(Value::as_f64)
            .ok_or_else(|| Error::missing_key("imaginary"))?;
        Ok((real, imaginary))
    }

    pub fn encode(value: &(f64, f64)) -> Value {
        serde_json::json!({"real": value.0, "imaginary": value.1})
    }
}

#[derive(Model, Debug, PartialEq)]
struct Inquisition {
    #[remodel(with = "int_bool")]
    expected: bool,
}

#[derive(Model, Debug, PartialEq)]
struct Signal {
    #[remodel(with = "complex_pair")]
    complex_type: (f64, f64),
}

#[test]
fn test_decode_applies_converter() {
    let inquisition = Inquisition::decode(&record(json!({"expected": 0}))).unwrap();
    assert_eq!(inquisition.expected, false);
}

#[test]
fn test_encode_applies_converter() {
    let inquisition = Inquisition { expected: true };
    assert_eq!(inquisition.encode(), record(json!({"expected": 1})));
}

#[test]
fn test_converter_rejects_bad_value() {
    let err = Inquisition::decode(&record(json!({"expected": 5}))).unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));

    let err = Inquisition::decode(&record(json!({"expected": "yes"}))).unwrap_err();
    assert!(matches!(err, Error::UnexpectedType { .. }));
}

#[test]
fn test_pair_encodes_to_named_parts() {
    let signal = Signal {
        complex_type: (4.0, 7.0),
    };
    assert_eq!(
        signal.encode(),
        record(json!({"complex_type": {"real": 4.0, "imaginary": 7.0}}))
    );
}

#[test]
fn test_pair_round_trip() {
    let signal = Signal {
        complex_type: (4.0, 7.0),
    };
    let decoded = Signal::decode(&signal.encode()).unwrap();
    assert_eq!(decoded, signal);

    let decoded =
        Signal::decode(&record(json!({"complex_type": {"real": 2, "imaginary": 1}}))).unwrap();
    assert_eq!(decoded.complex_type, (2.0, 1.0));
}

#[test]
fn test_converter_with_remapped_key() {
    #[derive(Model, Debug, PartialEq)]
    struct Data {
        #[remodel(key = "happy", with = "int_bool")]
        is_happy: bool,
    }

    let data = Data::decode(&record(json!({"happy": 1}))).unwrap();
    assert_eq!(data.is_happy, true);
    assert_eq!(data.encode(), record(json!({"happy": 1})));
}
