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

use remodel::{Model, ModelDefault, Record};
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    value.as_object().unwrap().clone()
}

#[test]
fn test_decode_then_encode_round_trip() {
    #[derive(Model, Debug, PartialEq)]
    struct Data {
        value: i64,
        name: String,
        flag: bool,
    }

    let input = record(json!({"value": 42, "name": "hello", "flag": true}));
    let data = Data::decode(&input).unwrap();
    assert_eq!(
        data,
        Data {
            value: 42,
            name: "hello".to_string(),
            flag: true,
        }
    );
    assert_eq!(data.encode(), input);
}

#[test]
fn test_all_absent_construction() {
    #[derive(Model, Debug, PartialEq)]
    struct Data {
        value: Option<i64>,
        name: Option<String>,
    }

    let data = Data::model_default();
    assert_eq!(data.value, None);
    assert_eq!(data.name, None);
}

#[test]
fn test_named_construction_with_overrides() {
    #[derive(Model, Debug, PartialEq)]
    struct Data {
        value: Option<i64>,
        name: Option<String>,
    }

    let data = Data {
        value: Some(7),
        ..Data::model_default()
    };
    assert_eq!(data.value, Some(7));
    assert_eq!(data.name, None);
}

#[test]
fn test_empty_model() {
    #[derive(Model, Debug, PartialEq)]
    struct Empty {}

    // An empty model decodes from any record and encodes to an empty one.
    let empty = Empty::decode(&record(json!({"whatever": 1}))).unwrap();
    assert_eq!(empty.encode(), Record::new());
}

#[test]
fn test_unit_model() {
    #[derive(Model, Debug, PartialEq)]
    struct Unit;

    let unit = Unit::decode(&Record::new()).unwrap();
    assert_eq!(unit, Unit);
    assert_eq!(unit.encode(), Record::new());
}

#[test]
fn test_skip_field() {
    #[derive(Model, Debug, PartialEq)]
    struct Data {
        value: i64,
        #[remodel(skip)]
        scratch: String,
    }

    let data = Data::decode(&record(json!({"value": 1, "scratch": "ignored"}))).unwrap();
    assert_eq!(data.scratch, "");

    let encoded = data.encode();
    assert!(!encoded.contains_key("scratch"));
    assert_eq!(encoded, record(json!({"value": 1})));
}

#[test]
fn test_decode_is_repeatable() {
    #[derive(Model, Debug, PartialEq)]
    struct Data {
        value: i64,
    }

    let input = record(json!({"value": 3}));
    let first = Data::decode(&input).unwrap();
    let second = Data::decode(&input).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.encode(), second.encode());
}
