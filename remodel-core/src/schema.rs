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

//! The frozen per-type field list and the builder that produces it.
//!
//! Registration is an init-then-freeze step: a [`Schema`] is assembled by
//! a [`SchemaBuilder`] exactly once per model type (normally inside a
//! `OnceLock` static) and never mutated afterwards, so concurrent decode
//! and encode calls share it without synchronization.

use std::fmt;

use crate::error::Error;
use crate::field::Field;
use crate::model::Model;
use crate::record::Record;

/// Post-encode hook: runs after every declared field has been packed and
/// may add or overwrite keys on the in-progress record.
pub type FinalizeFn<T> = fn(&T, &mut Record);

/// The frozen, ordered set of field descriptors governing decode/encode
/// for one model type.
///
/// Declaration order is preserved and determines deterministic processing
/// order (and therefore which field's failure is reported first); it does
/// not affect record identity.
pub struct Schema<T> {
    fields: Vec<Field<T>>,
    finalize: Option<FinalizeFn<T>>,
}

impl<T: 'static> Schema<T> {
    #[must_use]
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder {
            fields: Vec::new(),
            finalize: None,
        }
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field<T>> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T: Model> Schema<T> {
    /// Decodes a record into a fresh, fully-initialized instance.
    ///
    /// Starts from the all-absent instance, then processes each field in
    /// declaration order: a present key is unpacked through the field's
    /// plan; an absent key leaves an optional field absent and fails a
    /// required field immediately with [`Error::MissingKey`].
    pub fn decode(&self, record: &Record) -> Result<T, Error> {
        let mut instance = T::model_default();
        for field in &self.fields {
            match record.get(field.key()) {
                Some(raw) => field.unpack(&mut instance, raw)?,
                None if field.is_optional() => {}
                None => return Err(Error::missing_key(field.key())),
            }
        }
        Ok(instance)
    }

    /// Encodes an instance into a record: one key per declared field, in
    /// declaration order, then the post-encode hook if one is configured.
    pub fn encode(&self, instance: &T) -> Record {
        let mut record = Record::new();
        for field in &self.fields {
            record.insert(field.key().to_owned(), field.pack(instance));
        }
        if let Some(finalize) = self.finalize {
            finalize(instance, &mut record);
        }
        record
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("fields", &self.fields)
            .field("finalize", &self.finalize.map(|_| "fn"))
            .finish()
    }
}

/// Assembles a [`Schema`]. Consumed by [`SchemaBuilder::build`]; the
/// resulting schema is immutable.
pub struct SchemaBuilder<T> {
    fields: Vec<Field<T>>,
    finalize: Option<FinalizeFn<T>>,
}

impl<T: 'static> SchemaBuilder<T> {
    /// Appends a field descriptor. Order of calls is declaration order.
    #[must_use]
    pub fn field(mut self, field: Field<T>) -> Self {
        self.fields.push(field);
        self
    }

    /// Installs the post-encode hook.
    #[must_use]
    pub fn finalize(mut self, hook: FinalizeFn<T>) -> Self {
        self.finalize = Some(hook);
        self
    }

    /// Freezes the field list.
    #[must_use]
    pub fn build(self) -> Schema<T> {
        Schema {
            fields: self.fields,
            finalize: self.finalize,
        }
    }
}
