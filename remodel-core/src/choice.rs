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

//! Polymorphic schema selection driven by record content.
//!
//! A choice is not a schema: it is a strategy that, given a raw record,
//! picks which model type should decode it. Once chosen, the choice
//! delegates fully — the discriminator key stays in the record and is
//! simply ignored by the chosen schema unless it maps a field to the same
//! key.

use std::collections::BTreeMap;

use crate::error::Error;
use crate::model::Model;
use crate::record::{value_kind, Record};

/// The discriminator key [`MappedChoice`] uses unless overridden.
pub const DISCRIMINATOR_KEY: &str = "__type__";

/// The decode entry point of a chosen model type.
///
/// Rust schemas are type-indexed, so "the chosen schema" is represented by
/// its behavioral identity: the function that decodes a record into the
/// common target type `T`.
pub type DecodeFn<T> = fn(&Record) -> Result<T, Error>;

/// A strategy for selecting, per record, which model type decodes it.
///
/// There is no instantiable "unconfigured" selector: any value of a type
/// implementing this trait is a working strategy. Implement it directly
/// for content-based selection, or use [`MappedChoice`] for the common
/// discriminator-key case.
pub trait ModelChoice<T>: Send + Sync {
    /// Selects the decoder for this record.
    fn choose(&self, record: &Record) -> Result<DecodeFn<T>, Error>;

    /// Decodes by delegating fully to the chosen model type.
    fn decode(&self, record: &Record) -> Result<T, Error> {
        self.choose(record)?(record)
    }
}

/// Selects a model type by looking up a discriminator key's value in a
/// tag map.
///
/// Stateless beyond the key and the map; immutable after construction and
/// safe to share across concurrent decode calls.
///
/// ```
/// use remodel_core::choice::{MappedChoice, ModelChoice};
/// # use remodel_core::model::{Model, ModelDefault};
/// # use remodel_core::schema::Schema;
/// # use std::sync::OnceLock;
/// # #[derive(Default)]
/// # struct Cow;
/// # impl ModelDefault for Cow { fn model_default() -> Self { Self } }
/// # impl Model for Cow {
/// #     fn schema() -> &'static Schema<Self> {
/// #         static SCHEMA: OnceLock<Schema<Cow>> = OnceLock::new();
/// #         SCHEMA.get_or_init(|| Schema::builder().build())
/// #     }
/// # }
/// # #[derive(Default)]
/// # struct Dog;
/// # impl ModelDefault for Dog { fn model_default() -> Self { Self } }
/// # impl Model for Dog {
/// #     fn schema() -> &'static Schema<Self> {
/// #         static SCHEMA: OnceLock<Schema<Dog>> = OnceLock::new();
/// #         SCHEMA.get_or_init(|| Schema::builder().build())
/// #     }
/// # }
/// enum Animal {
///     Cow(Cow),
///     Dog(Dog),
/// }
///
/// let choice: MappedChoice<Animal> = MappedChoice::new()
///     .variant_with("cow", |record| Cow::decode(record).map(Animal::Cow))
///     .variant_with("dog", |record| Dog::decode(record).map(Animal::Dog));
///
/// let record = serde_json::json!({"__type__": "dog"});
/// let animal = choice.decode(record.as_object().unwrap()).unwrap();
/// assert!(matches!(animal, Animal::Dog(_)));
/// ```
pub struct MappedChoice<T> {
    discriminator_key: &'static str,
    variants: BTreeMap<&'static str, DecodeFn<T>>,
}

impl<T> MappedChoice<T> {
    /// A mapped choice on the default [`DISCRIMINATOR_KEY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_key(DISCRIMINATOR_KEY)
    }

    /// A mapped choice on an explicit discriminator key.
    #[must_use]
    pub fn with_key(discriminator_key: &'static str) -> Self {
        MappedChoice {
            discriminator_key,
            variants: BTreeMap::new(),
        }
    }

    /// Registers a candidate model type under a tag, converting into the
    /// common target through its `Into` impl.
    #[must_use]
    pub fn variant<M>(self, tag: &'static str) -> Self
    where
        M: Model + Into<T>,
    {
        self.variant_with(tag, |record| M::decode(record).map(Into::into))
    }

    /// Registers a candidate decoder under a tag.
    #[must_use]
    pub fn variant_with(mut self, tag: &'static str, decode: DecodeFn<T>) -> Self {
        self.variants.insert(tag, decode);
        self
    }

    #[must_use]
    pub fn discriminator_key(&self) -> &'static str {
        self.discriminator_key
    }
}

impl<T> Default for MappedChoice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ModelChoice<T> for MappedChoice<T> {
    fn choose(&self, record: &Record) -> Result<DecodeFn<T>, Error> {
        let raw = record
            .get(self.discriminator_key)
            .ok_or_else(|| Error::missing_discriminator(self.discriminator_key))?;
        let tag = raw
            .as_str()
            .ok_or_else(|| Error::unexpected_type("string", value_kind(raw)))?;
        self.variants
            .get(tag)
            .copied()
            .ok_or_else(|| Error::unknown_discriminator(self.discriminator_key, tag))
    }
}

/// The capability a polymorphic field type carries: how to select a
/// decoder for incoming records, and how a held value encodes itself.
///
/// Typically implemented (via `#[derive(Polymorphic)]`) on an enum with
/// one newtype variant per candidate model; encode dispatches on the
/// variant, so a value encodes through its concrete model's schema —
/// including that schema's post-encode hook, which is where the
/// discriminator tag gets stamped back onto the record.
pub trait Polymorphic: Sized + 'static {
    /// The selection strategy shared by all decodes of this type.
    fn choice() -> &'static dyn ModelChoice<Self>;

    /// Encodes the concrete variant held by this value.
    fn encode_record(&self) -> Record;
}
