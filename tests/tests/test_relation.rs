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

#[derive(Model, Debug, PartialEq)]
struct Inquisition {
    #[remodel(key = "id")]
    inquisition_id: i64,
}

#[derive(Model, Debug, PartialEq)]
struct Person {
    name: String,
}

#[derive(Model, Debug, PartialEq)]
struct Bob {
    #[remodel(key = "id")]
    bob_id: i64,
    #[remodel(relation, key = "spanishInquisition")]
    spanish_inquisition: Inquisition,
    #[remodel(relation)]
    people: Vec<Person>,
}

#[test]
fn test_single_relation_decodes_nested_record() {
    let bob = Bob::decode(&record(json!({
        "id": 123456,
        "spanishInquisition": {"id": 5678},
        "people": [],
    })))
    .unwrap();
    assert_eq!(bob.spanish_inquisition.inquisition_id, 5678);
}

#[test]
fn test_sequence_preserves_order() {
    let bob = Bob::decode(&record(json!({
        "id": 1,
        "spanishInquisition": {"id": 2},
        "people": [{"name": "Alice"}, {"name": "Sue"}],
    })))
    .unwrap();
    assert_eq!(
        bob.people,
        vec![
            Person {
                name: "Alice".to_string()
            },
            Person {
                name: "Sue".to_string()
            },
        ]
    );
}

#[test]
fn test_round_trip() {
    let bob = Bob {
        bob_id: 42,
        spanish_inquisition: Inquisition { inquisition_id: 10 },
        people: vec![
            Person {
                name: "Alice".to_string(),
            },
            Person {
                name: "Sue".to_string(),
            },
        ],
    };

    let encoded = bob.encode();
    assert_eq!(
        encoded,
        record(json!({
            "id": 42,
            "spanishInquisition": {"id": 10},
            "people": [{"name": "Alice"}, {"name": "Sue"}],
        }))
    );
    assert_eq!(Bob::decode(&encoded).unwrap(), bob);
}

#[test]
fn test_nested_failure_propagates_unchanged() {
    // The second guest is missing its required key; nothing is defaulted.
    let err = Bob::decode(&record(json!({
        "id": 1,
        "spanishInquisition": {"id": 2},
        "people": [{"name": "Alice"}, {"age": 3}],
    })))
    .unwrap_err();
    assert!(matches!(err, Error::MissingKey(key) if key == "name"));
}

#[test]
fn test_relation_requires_record_shape() {
    let err = Bob::decode(&record(json!({
        "id": 1,
        "spanishInquisition": 7,
        "people": [],
    })))
    .unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedType {
            expected: "object",
            found: "number"
        }
    ));

    let err = Bob::decode(&record(json!({
        "id": 1,
        "spanishInquisition": {"id": 2},
        "people": {"name": "Alice"},
    })))
    .unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedType {
            expected: "array",
            found: "object"
        }
    ));
}

#[test]
fn test_optional_relation() {
    #[derive(Model, Debug, PartialEq)]
    struct Owner {
        #[remodel(relation)]
        friend: Option<Person>,
    }

    let owner = Owner::decode(&Record::new()).unwrap();
    assert_eq!(owner.friend, None);
    assert_eq!(owner.encode(), record(json!({"friend": null})));

    let owner = Owner::decode(&record(json!({"friend": {"name": "Sue"}}))).unwrap();
    assert_eq!(
        owner.friend,
        Some(Person {
            name: "Sue".to_string()
        })
    );
}

#[test]
fn test_empty_sequence() {
    let bob = Bob::decode(&record(json!({
        "id": 1,
        "spanishInquisition": {"id": 2},
        "people": [],
    })))
    .unwrap();
    assert_eq!(bob.people, vec![]);
    assert_eq!(bob.encode()["people"], json!([]));
}
