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

//! The generic record model exchanged with the wire-format layer.
//!
//! The core never parses text. It consumes and produces already-parsed
//! trees: a [`Record`] is a string-keyed mapping whose values are scalars,
//! nested records, or sequences. `serde_json`'s value types are that tree.

use crate::error::Error;

pub use serde_json::Value;

/// A string-keyed mapping of raw values — the data unit the core consumes
/// and produces.
pub type Record = serde_json::Map<String, Value>;

/// Names a raw value's shape for diagnostics.
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Projects a raw value to a nested record, failing with
/// [`Error::UnexpectedType`] for any other shape.
pub fn as_record(value: &Value) -> Result<&Record, Error> {
    value
        .as_object()
        .ok_or_else(|| Error::unexpected_type("object", value_kind(value)))
}
