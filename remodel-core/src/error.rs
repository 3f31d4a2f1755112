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

use std::borrow::Cow;

use thiserror::Error;

/// Error type for decode failures.
///
/// Every variant is a data-shape failure observed while decoding a record;
/// encoding is infallible. Errors propagate unchanged through nested
/// relations to the caller of the outermost decode — nothing is caught,
/// retried, or defaulted inside the core.
///
/// Prefer the static constructor functions ([`Error::missing_key`] and
/// friends) over constructing variants directly; they keep conversion and
/// message formatting in one place.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A required field's wire key is absent from the input record.
    #[error("missing required key `{0}`")]
    MissingKey(Cow<'static, str>),

    /// A choice's discriminator key is absent from the record being
    /// classified.
    #[error("record has no discriminator key `{0}`")]
    MissingDiscriminator(Cow<'static, str>),

    /// The discriminator's value has no entry in the choice's type map.
    #[error("unknown discriminator value `{value}` for key `{key}`")]
    UnknownDiscriminator {
        key: Cow<'static, str>,
        value: String,
    },

    /// A raw value's shape does not match what a codec, relation, or
    /// choice requires.
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    /// Invalid or unconvertible data encountered by a converter.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::MissingKey`] for the given wire key.
    #[cold]
    pub fn missing_key<S: Into<Cow<'static, str>>>(key: S) -> Self {
        Error::MissingKey(key.into())
    }

    /// Creates a new [`Error::MissingDiscriminator`] for the given key.
    #[cold]
    pub fn missing_discriminator<S: Into<Cow<'static, str>>>(key: S) -> Self {
        Error::MissingDiscriminator(key.into())
    }

    /// Creates a new [`Error::UnknownDiscriminator`] for the given key and
    /// the value that had no mapping.
    #[cold]
    pub fn unknown_discriminator<S: Into<Cow<'static, str>>>(key: S, value: &str) -> Self {
        Error::UnknownDiscriminator {
            key: key.into(),
            value: value.to_owned(),
        }
    }

    /// Creates a new [`Error::UnexpectedType`] from expected/found shape
    /// names (see [`crate::record::value_kind`]).
    #[cold]
    pub fn unexpected_type(expected: &'static str, found: &'static str) -> Self {
        Error::UnexpectedType { expected, found }
    }

    /// Creates a new [`Error::InvalidData`] from a string or static
    /// message. This is the constructor user-supplied converters are
    /// expected to reach for.
    ///
    /// # Example
    /// ```
    /// use remodel_core::error::Error;
    ///
    /// let err = Error::invalid_data("value must be 0 or 1");
    /// let err = Error::invalid_data(format!("integer {} out of range", 300));
    /// ```
    #[cold]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::InvalidData(s.into())
    }
}
