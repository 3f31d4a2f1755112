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

use remodel_core::model::Model;
use remodel_core::record::{Record, Value};
use remodel_derive::{Model, Polymorphic};
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    value.as_object().unwrap().clone()
}

fn overwrite_item(_model: &Overwrite, record: &mut Record) {
    record.insert("item".to_owned(), Value::String("overwritten".to_owned()));
}

#[derive(Model, Debug, PartialEq)]
#[remodel(finalize = "overwrite_item")]
struct Overwrite {
    item: String,
}

#[test]
fn test_hook_may_overwrite_packed_keys() {
    let overwrite = Overwrite {
        item: "item".to_string(),
    };
    assert_eq!(overwrite.encode()["item"], json!("overwritten"));
}

#[derive(Model, Debug, PartialEq)]
#[remodel(tag = "dog")]
struct Dog {
    wagging: bool,
}

#[derive(Model, Debug, PartialEq)]
#[remodel(tag = "cow")]
struct Cow {}

#[derive(Polymorphic, Debug, PartialEq)]
enum Animal {
    #[remodel(tag = "cow")]
    Cow(Cow),
    #[remodel(tag = "dog")]
    Dog(Dog),
}

#[test]
fn test_tag_is_stamped_on_encode() {
    let dog = Dog { wagging: true };
    assert_eq!(
        dog.encode(),
        record(json!({"__type__": "dog", "wagging": true}))
    );
}

#[test]
fn test_custom_tag_key() {
    #[derive(Model, Debug, PartialEq)]
    #[remodel(tag = "llama", tag_key = "kind")]
    struct Llama {}

    assert_eq!(Llama {}.encode(), record(json!({"kind": "llama"})));
}

#[test]
fn test_tagged_choice_round_trip() {
    #[derive(Model, Debug, PartialEq)]
    struct PetOwner {
        #[remodel(choice)]
        pet: Animal,
    }

    let owner = PetOwner {
        pet: Animal::Dog(Dog { wagging: true }),
    };
    // The stamped tag is what lets the choice re-dispatch on the way back.
    let encoded = owner.encode();
    assert_eq!(encoded["pet"]["__type__"], json!("dog"));
    assert_eq!(PetOwner::decode(&encoded).unwrap(), owner);

    let owner = PetOwner {
        pet: Animal::Cow(Cow {}),
    };
    assert_eq!(PetOwner::decode(&owner.encode()).unwrap(), owner);
}

#[test]
fn test_hook_runs_after_all_fields_are_packed() {
    fn summarize(model: &Pair, record: &mut Record) {
        let sum = model.left + model.right;
        record.insert("sum".to_owned(), Value::from(sum));
    }

    #[derive(Model, Debug, PartialEq)]
    #[remodel(finalize = "summarize")]
    struct Pair {
        left: i64,
        right: i64,
    }

    let pair = Pair { left: 2, right: 3 };
    assert_eq!(
        pair.encode(),
        record(json!({"left": 2, "right": 3, "sum": 5}))
    );
}
