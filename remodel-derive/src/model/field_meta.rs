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

//! Field-level metadata parsing for `#[remodel(...)]` attributes.
//!
//! Field attributes:
//! - `key = "..."`: explicit wire key instead of the field name
//! - `with = "path"`: custom converter module for this field
//! - `relation`: the field embeds another model
//! - `choice`: the field is polymorphic through its `Polymorphic` impl
//! - `skip`: the field is not part of the schema

use syn::{Field, Type};

/// Represents parsed `#[remodel(...)]` field attributes.
#[derive(Debug, Clone, Default)]
pub struct FieldMeta {
    /// Explicit wire key; `None` means the field name is the key.
    pub key: Option<String>,
    /// Custom converter module path.
    pub with: Option<syn::Path>,
    /// Whether the field embeds another model.
    pub relation: bool,
    /// Whether the field is a polymorphic embed.
    pub choice: bool,
    /// Whether to leave this field out of the schema entirely.
    pub skip: bool,
}

/// Syntactic shape of a field's type, which selects the descriptor
/// constructor for relation/choice fields and the optional flag for all
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Any type that is not an `Option<..>` or `Vec<..>` at the outside.
    Plain,
    /// `Option<T>` — registers as optional.
    Option,
    /// `Vec<T>` — a sequence for relation/choice fields.
    Vec,
}

/// Parse `#[remodel(...)]` attributes from a field.
pub fn parse_field_meta(field: &Field) -> syn::Result<FieldMeta> {
    let mut meta = FieldMeta::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("remodel") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("key") {
                let lit: syn::LitStr = nested.value()?.parse()?;
                meta.key = Some(lit.value());
            } else if nested.path.is_ident("with") {
                let lit: syn::LitStr = nested.value()?.parse()?;
                meta.with = Some(lit.parse()?);
            } else if nested.path.is_ident("relation") {
                meta.relation = true;
            } else if nested.path.is_ident("choice") {
                meta.choice = true;
            } else if nested.path.is_ident("skip") {
                meta.skip = true;
            } else {
                return Err(nested.error("unrecognized remodel field attribute"));
            }
            Ok(())
        })?;
    }

    if meta.relation && meta.choice {
        return Err(syn::Error::new_spanned(
            field,
            "a field cannot be both a relation and a choice",
        ));
    }
    if meta.with.is_some() && (meta.relation || meta.choice) {
        return Err(syn::Error::new_spanned(
            field,
            "`with` applies to attributes, not relation or choice fields",
        ));
    }

    Ok(meta)
}

/// Extract the outer type name from a type (e.g., "Option" from
/// `Option<String>`).
fn extract_outer_type_name(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Classify a field type's syntactic shape.
pub fn classify_field_shape(ty: &Type) -> FieldShape {
    match extract_outer_type_name(ty).as_str() {
        "Option" => FieldShape::Option,
        "Vec" => FieldShape::Vec,
        _ => FieldShape::Plain,
    }
}
