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

//! Per-attribute descriptors: one named, codec-bearing slot on a schema.
//!
//! A [`Field`] is created already bound to its field name and carries the
//! complete pack/unpack plan for that slot. The owning [`Schema`] drives
//! descriptors in declaration order; a descriptor never inspects the
//! record itself beyond the single raw value it is handed.
//!
//! [`Schema`]: crate::schema::Schema

use std::fmt;

use crate::choice::Polymorphic;
use crate::codec::Codec;
use crate::error::Error;
use crate::model::Model;
use crate::record::{as_record, value_kind, Record, Value};

type UnpackFn<T> = Box<dyn Fn(&mut T, &Value) -> Result<(), Error> + Send + Sync>;
type PackFn<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;

/// What kind of slot a descriptor declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A scalar attribute converted by a [`Codec`] or a custom pair.
    Attribute,
    /// An embedded model, or an ordered sequence of them.
    Relation { sequence: bool },
    /// A polymorphic embed selected per record, or a sequence of them.
    Choice { sequence: bool },
}

/// One declared attribute of a model type `T`.
pub struct Field<T> {
    name: &'static str,
    wire_key: Option<&'static str>,
    optional: bool,
    kind: FieldKind,
    unpack: UnpackFn<T>,
    pack: PackFn<T>,
}

impl<T: 'static> Field<T> {
    fn new(name: &'static str, kind: FieldKind, unpack: UnpackFn<T>, pack: PackFn<T>) -> Self {
        Field {
            name,
            wire_key: None,
            optional: false,
            kind,
            unpack,
            pack,
        }
    }

    /// An attribute using the field type's [`Codec`].
    pub fn attribute<V: Codec + 'static>(
        name: &'static str,
        get: fn(&T) -> &V,
        set: fn(&mut T, V),
    ) -> Self {
        Self::new(
            name,
            FieldKind::Attribute,
            Box::new(move |instance, raw| {
                set(instance, V::decode(raw)?);
                Ok(())
            }),
            Box::new(move |instance| get(instance).encode()),
        )
    }

    /// An attribute with a user-supplied converter pair instead of the
    /// field type's [`Codec`]. The decode function may fail or coerce as
    /// it sees fit; the encode function is total.
    pub fn attribute_with<V: 'static>(
        name: &'static str,
        get: fn(&T) -> &V,
        set: fn(&mut T, V),
        decode: fn(&Value) -> Result<V, Error>,
        encode: fn(&V) -> Value,
    ) -> Self {
        Self::new(
            name,
            FieldKind::Attribute,
            Box::new(move |instance, raw| {
                set(instance, decode(raw)?);
                Ok(())
            }),
            Box::new(move |instance| encode(get(instance))),
        )
    }

    /// An embedded model decoded and encoded through its own schema.
    pub fn relation<M: Model>(name: &'static str, get: fn(&T) -> &M, set: fn(&mut T, M)) -> Self {
        Self::new(
            name,
            FieldKind::Relation { sequence: false },
            Box::new(move |instance, raw| {
                set(instance, M::decode(as_record(raw)?)?);
                Ok(())
            }),
            Box::new(move |instance| Value::Object(get(instance).encode())),
        )
    }

    /// An optional embedded model; `null` and `None` map to each other.
    pub fn relation_opt<M: Model>(
        name: &'static str,
        get: fn(&T) -> &Option<M>,
        set: fn(&mut T, Option<M>),
    ) -> Self {
        Self::new(
            name,
            FieldKind::Relation { sequence: false },
            Box::new(move |instance, raw| {
                let value = match raw {
                    Value::Null => None,
                    raw => Some(M::decode(as_record(raw)?)?),
                };
                set(instance, value);
                Ok(())
            }),
            Box::new(move |instance| match get(instance) {
                Some(model) => Value::Object(model.encode()),
                None => Value::Null,
            }),
        )
    }

    /// An ordered sequence of embedded models. Each element is decoded
    /// independently; input order is preserved in both directions.
    pub fn relation_seq<M: Model>(
        name: &'static str,
        get: fn(&T) -> &Vec<M>,
        set: fn(&mut T, Vec<M>),
    ) -> Self {
        Self::new(
            name,
            FieldKind::Relation { sequence: true },
            Box::new(move |instance, raw| {
                set(instance, decode_elements(raw, M::decode)?);
                Ok(())
            }),
            Box::new(move |instance| {
                Value::Array(
                    get(instance)
                        .iter()
                        .map(|model| Value::Object(model.encode()))
                        .collect(),
                )
            }),
        )
    }

    /// A polymorphic embed: the value's schema is selected per record by
    /// the field type's [`Polymorphic`] choice.
    pub fn choice<P: Polymorphic>(
        name: &'static str,
        get: fn(&T) -> &P,
        set: fn(&mut T, P),
    ) -> Self {
        Self::new(
            name,
            FieldKind::Choice { sequence: false },
            Box::new(move |instance, raw| {
                set(instance, P::choice().decode(as_record(raw)?)?);
                Ok(())
            }),
            Box::new(move |instance| Value::Object(get(instance).encode_record())),
        )
    }

    /// An optional polymorphic embed.
    pub fn choice_opt<P: Polymorphic>(
        name: &'static str,
        get: fn(&T) -> &Option<P>,
        set: fn(&mut T, Option<P>),
    ) -> Self {
        Self::new(
            name,
            FieldKind::Choice { sequence: false },
            Box::new(move |instance, raw| {
                let value = match raw {
                    Value::Null => None,
                    raw => Some(P::choice().decode(as_record(raw)?)?),
                };
                set(instance, value);
                Ok(())
            }),
            Box::new(move |instance| match get(instance) {
                Some(value) => Value::Object(value.encode_record()),
                None => Value::Null,
            }),
        )
    }

    /// An ordered sequence of polymorphic embeds. The choice runs per
    /// element, so heterogeneous sequences are permitted.
    pub fn choice_seq<P: Polymorphic>(
        name: &'static str,
        get: fn(&T) -> &Vec<P>,
        set: fn(&mut T, Vec<P>),
    ) -> Self {
        Self::new(
            name,
            FieldKind::Choice { sequence: true },
            Box::new(move |instance, raw| {
                set(
                    instance,
                    decode_elements(raw, |record| P::choice().decode(record))?,
                );
                Ok(())
            }),
            Box::new(move |instance| {
                Value::Array(
                    get(instance)
                        .iter()
                        .map(|value| Value::Object(value.encode_record()))
                        .collect(),
                )
            }),
        )
    }

    /// Overrides the key this field reads and writes in the record.
    /// Without an explicit wire key, the field name is the key.
    #[must_use]
    pub fn wire_key(mut self, key: &'static str) -> Self {
        self.wire_key = Some(key);
        self
    }

    /// Marks the field optional: a missing wire key decodes to the
    /// field's absent value instead of failing.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The name this field is bound to on the owning model.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The resolved record key: the explicit wire key if one was given,
    /// otherwise the field name.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.wire_key.unwrap_or(self.name)
    }

    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub(crate) fn unpack(&self, instance: &mut T, raw: &Value) -> Result<(), Error> {
        (self.unpack)(instance, raw)
    }

    pub(crate) fn pack(&self, instance: &T) -> Value {
        (self.pack)(instance)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("wire_key", &self.wire_key)
            .field("optional", &self.optional)
            .field("kind", &self.kind)
            .finish()
    }
}

fn decode_elements<V>(
    raw: &Value,
    decode: impl Fn(&Record) -> Result<V, Error>,
) -> Result<Vec<V>, Error> {
    let items = raw
        .as_array()
        .ok_or_else(|| Error::unexpected_type("array", value_kind(raw)))?;
    let mut decoded = Vec::with_capacity(items.len());
    for item in items {
        decoded.push(decode(as_record(item)?)?);
    }
    Ok(decoded)
}
