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

//! # Remodel Core
//!
//! This is the core implementation of the Remodel mapping framework. It
//! provides the runtime machinery for translating between Rust record
//! types and generic string-keyed data records such as parsed JSON.
//!
//! ## Architecture
//!
//! - **`record`**: the generic record model exchanged at the boundary
//! - **`codec`**: scalar converters between raw values and field values
//! - **`field`**: per-attribute descriptors with their pack/unpack plans
//! - **`schema`**: the frozen, ordered per-type field list and its builder
//! - **`model`**: the `Model` trait — decode/encode entry points per type
//! - **`choice`**: polymorphic schema selection driven by record content
//! - **`error`**: error handling and result types
//!
//! ## Key Concepts
//!
//! A type declares its attributes once; the resulting [`schema::Schema`]
//! is built exactly once per type and frozen, after which
//! `decode(record) -> instance` and `encode(instance) -> record` are pure,
//! repeatable operations driven by that frozen plan. Relations recursively
//! reuse the nested type's schema, and choices select a schema per record
//! at decode time.
//!
//! This crate is typically used through the higher-level `remodel` crate,
//! which re-exports the derive macros and a more convenient API.

pub mod choice;
pub mod codec;
pub mod error;
pub mod field;
pub mod model;
pub mod record;
pub mod schema;
