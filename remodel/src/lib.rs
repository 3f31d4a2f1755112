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

//! # Remodel
//!
//! Remodel is a declarative mapping layer between Rust record types and
//! generic string-keyed data records, as produced by JSON-like formats. A
//! type declares a fixed set of named, typed attributes; Remodel derives a
//! reusable encode/decode plan for that type exactly once, at schema
//! definition time, and applies it uniformly on every instance thereafter.
//!
//! ## Declaring a model
//!
//! ```rust
//! use remodel::{Model, Record};
//! use serde_json::json;
//!
//! #[derive(Model, Debug, PartialEq)]
//! struct Bob {
//!     #[remodel(key = "id")]
//!     bob_id: i64,
//!     entry_fee: i64,
//!     nickname: Option<String>,
//! }
//!
//! let record: Record = json!({"id": 42, "entry_fee": 7})
//!     .as_object()
//!     .unwrap()
//!     .clone();
//!
//! let bob = Bob::decode(&record).unwrap();
//! assert_eq!(bob.bob_id, 42);
//! assert_eq!(bob.nickname, None);
//!
//! let encoded = bob.encode();
//! assert_eq!(encoded["id"], json!(42));
//! assert_eq!(encoded["nickname"], json!(null));
//! ```
//!
//! Every declared field holds a definite value after construction; the
//! all-absent instance is `Bob::model_default()`, and named construction
//! with overrides is the ordinary struct-literal form:
//!
//! ```rust
//! # use remodel::{Model, ModelDefault};
//! # #[derive(Model, Debug, PartialEq)]
//! # struct Bob {
//! #     bob_id: i64,
//! #     nickname: Option<String>,
//! # }
//! let bob = Bob {
//!     bob_id: 42,
//!     ..Bob::model_default()
//! };
//! assert_eq!(bob.nickname, None);
//! ```
//!
//! ## Relations
//!
//! A field marked `#[remodel(relation)]` embeds another model — a single
//! record, an optional one, or an ordered sequence:
//!
//! ```rust
//! use remodel::{Model, Record};
//! use serde_json::json;
//!
//! #[derive(Model, Debug, PartialEq)]
//! struct Person {
//!     name: String,
//! }
//!
//! #[derive(Model, Debug, PartialEq)]
//! struct Party {
//!     #[remodel(relation)]
//!     host: Person,
//!     #[remodel(relation)]
//!     guests: Vec<Person>,
//! }
//!
//! let record: Record = json!({
//!     "host": {"name": "Alice"},
//!     "guests": [{"name": "Sue"}, {"name": "Bob"}],
//! })
//! .as_object()
//! .unwrap()
//! .clone();
//!
//! let party = Party::decode(&record).unwrap();
//! assert_eq!(party.guests.len(), 2);
//! assert_eq!(party.guests[0].name, "Sue");
//! ```
//!
//! ## Polymorphic choices
//!
//! When the concrete type is only discoverable from the data itself, a
//! `#[derive(Polymorphic)]` enum selects the schema per record through a
//! discriminator key (default `"__type__"`); `#[remodel(tag = "...")]` on
//! the variant models stamps the tag back on encode:
//!
//! ```rust
//! use remodel::{Model, Polymorphic, Record};
//! use serde_json::json;
//!
//! #[derive(Model, Debug, PartialEq)]
//! #[remodel(tag = "cow")]
//! struct Cow {}
//!
//! #[derive(Model, Debug, PartialEq)]
//! #[remodel(tag = "dog")]
//! struct Dog {
//!     wagging: bool,
//! }
//!
//! #[derive(Polymorphic, Debug, PartialEq)]
//! enum Animal {
//!     #[remodel(tag = "cow")]
//!     Cow(Cow),
//!     #[remodel(tag = "dog")]
//!     Dog(Dog),
//! }
//!
//! #[derive(Model, Debug, PartialEq)]
//! struct PetOwner {
//!     #[remodel(choice)]
//!     pet: Animal,
//! }
//!
//! let record: Record = json!({"pet": {"__type__": "dog", "wagging": true}})
//!     .as_object()
//!     .unwrap()
//!     .clone();
//!
//! let owner = PetOwner::decode(&record).unwrap();
//! assert_eq!(owner.pet, Animal::Dog(Dog { wagging: true }));
//! ```
//!
//! ## Custom converters
//!
//! `#[remodel(with = "path")]` swaps a field's default [`Codec`] for an
//! arbitrary decode/encode function pair — the classic example being a
//! boolean stored as an integer on the wire.
//!
//! ## Error handling
//!
//! Decoding fails with a classified [`Error`]: a missing required key, a
//! missing or unknown discriminator, or a value of the wrong shape.
//! Failures inside nested relations propagate unchanged to the caller of
//! the outermost decode; encoding is infallible.

pub use remodel_core::choice::{
    DecodeFn, MappedChoice, ModelChoice, Polymorphic, DISCRIMINATOR_KEY,
};
pub use remodel_core::codec::Codec;
pub use remodel_core::error::Error;
pub use remodel_core::field::{Field, FieldKind};
pub use remodel_core::model::{Model, ModelDefault};
pub use remodel_core::record::{value_kind, Record, Value};
pub use remodel_core::schema::{Schema, SchemaBuilder};
pub use remodel_derive::{Model, Polymorphic};
