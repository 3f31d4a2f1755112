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

//! # Remodel Derive Macros
//!
//! Procedural macros for the Remodel mapping framework. The macros expand
//! a type declaration into the explicit schema registration the core
//! exposes: a frozen, ordered field list built exactly once per type.
//!
//! ## `#[derive(Model)]`
//!
//! Implements `Model` (and `ModelDefault`) for a named-field struct. Each
//! field becomes one descriptor in declaration order; `#[remodel(...)]`
//! attributes adjust how a field maps:
//!
//! - `key = "..."` — explicit wire key (default: the field name)
//! - `with = "path"` — custom converter module providing
//!   `decode(&Value) -> Result<V, Error>` and `encode(&V) -> Value`
//! - `relation` — the field embeds another model (`M`, `Option<M>`, or
//!   `Vec<M>`)
//! - `choice` — the field is polymorphic via the type's `Polymorphic`
//!   impl (`P`, `Option<P>`, or `Vec<P>`)
//! - `skip` — not part of the schema
//!
//! `Option<..>` fields register as optional automatically. Struct-level
//! `#[remodel(tag = "...")]` (with optional `tag_key = "..."`) installs a
//! post-encode hook stamping a type tag; `#[remodel(finalize = "path")]`
//! installs an arbitrary hook.
//!
//! ## `#[derive(Polymorphic)]`
//!
//! Implements `Polymorphic` (and `ModelDefault`) for an enum whose
//! variants are single-field newtypes over model types. The enum-level
//! `#[remodel(key = "...")]` overrides the discriminator key; each
//! variant's `#[remodel(tag = "...")]` overrides its discriminator value
//! (default: the variant identifier).

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod choice;
mod model;

/// Derive macro generating the frozen schema and mapping entry points for
/// a named-field struct.
///
/// # Example
///
/// ```rust, ignore
/// use remodel::Model;
///
/// #[derive(Model, Debug, PartialEq)]
/// struct Bob {
///     #[remodel(key = "id")]
///     bob_id: i64,
///     entry_fee: i64,
/// }
/// ```
#[proc_macro_derive(Model, attributes(remodel))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    model::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro generating the polymorphic-choice capability for an enum
/// of newtype variants over model types.
///
/// # Example
///
/// ```rust, ignore
/// use remodel::Polymorphic;
///
/// #[derive(Polymorphic, Debug, PartialEq)]
/// enum Animal {
///     #[remodel(tag = "cow")]
///     Cow(Cow),
///     #[remodel(tag = "dog")]
///     Dog(Dog),
/// }
/// ```
#[proc_macro_derive(Polymorphic, attributes(remodel))]
pub fn derive_polymorphic(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    choice::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
