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

//! Expansion of `#[derive(Model)]`: a struct declaration becomes the
//! explicit schema registration the core exposes — one descriptor per
//! field, in declaration order, assembled once inside a `OnceLock`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

pub mod field_meta;

use field_meta::{classify_field_shape, parse_field_meta, FieldMeta, FieldShape};

/// Parsed struct-level `#[remodel(...)]` attributes.
#[derive(Default)]
struct StructMeta {
    /// Type tag stamped by a generated post-encode hook.
    tag: Option<String>,
    /// Key the tag is stamped under (default `"__type__"`).
    tag_key: Option<String>,
    /// Arbitrary post-encode hook.
    finalize: Option<syn::Path>,
}

fn parse_struct_meta(input: &DeriveInput) -> syn::Result<StructMeta> {
    let mut meta = StructMeta::default();

    for attr in &input.attrs {
        if !attr.path().is_ident("remodel") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("tag") {
                let lit: LitStr = nested.value()?.parse()?;
                meta.tag = Some(lit.value());
            } else if nested.path.is_ident("tag_key") {
                let lit: LitStr = nested.value()?.parse()?;
                meta.tag_key = Some(lit.value());
            } else if nested.path.is_ident("finalize") {
                let lit: LitStr = nested.value()?.parse()?;
                meta.finalize = Some(lit.parse()?);
            } else {
                return Err(nested.error("unrecognized remodel struct attribute"));
            }
            Ok(())
        })?;
    }

    if meta.tag.is_some() && meta.finalize.is_some() {
        return Err(syn::Error::new_spanned(
            input,
            "`tag` and `finalize` are mutually exclusive",
        ));
    }
    if meta.tag_key.is_some() && meta.tag.is_none() {
        return Err(syn::Error::new_spanned(
            input,
            "`tag_key` requires `tag`",
        ));
    }

    Ok(meta)
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "generic models are not supported",
        ));
    }

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "tuple structs are not supported; models are constructed by field name",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "`#[derive(Model)]` supports structs; use `#[derive(Polymorphic)]` for enums",
            ));
        }
    };

    let struct_meta = parse_struct_meta(input)?;
    let name = &input.ident;

    let mut field_calls = Vec::with_capacity(fields.len());
    for field in &fields {
        let meta = parse_field_meta(field)?;
        if meta.skip {
            continue;
        }
        field_calls.push(descriptor_call(name, field, &meta));
    }

    let finalize_call = finalize_call(name, &struct_meta);
    let default_body = default_body(&input.data, &fields);

    Ok(quote! {
        impl ::remodel_core::model::ModelDefault for #name {
            fn model_default() -> Self {
                #default_body
            }
        }

        impl ::remodel_core::model::Model for #name {
            fn schema() -> &'static ::remodel_core::schema::Schema<Self> {
                static SCHEMA: ::std::sync::OnceLock<::remodel_core::schema::Schema<#name>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    ::remodel_core::schema::Schema::builder()
                        #(#field_calls)*
                        #finalize_call
                        .build()
                })
            }
        }
    })
}

/// One `.field(Field::..)` builder call for a declared field.
fn descriptor_call(name: &syn::Ident, field: &syn::Field, meta: &FieldMeta) -> TokenStream {
    let fname = field.ident.as_ref().expect("named field");
    let fname_str = fname.to_string();
    let shape = classify_field_shape(&field.ty);

    let getter = quote! { |model: &#name| &model.#fname };
    let setter = quote! { |model: &mut #name, value| model.#fname = value };

    let constructor = if meta.relation {
        match shape {
            FieldShape::Plain => quote! { relation },
            FieldShape::Option => quote! { relation_opt },
            FieldShape::Vec => quote! { relation_seq },
        }
    } else if meta.choice {
        match shape {
            FieldShape::Plain => quote! { choice },
            FieldShape::Option => quote! { choice_opt },
            FieldShape::Vec => quote! { choice_seq },
        }
    } else {
        quote! { attribute }
    };

    let descriptor = if let Some(with) = &meta.with {
        quote! {
            ::remodel_core::field::Field::attribute_with(
                #fname_str, #getter, #setter, #with::decode, #with::encode,
            )
        }
    } else {
        quote! {
            ::remodel_core::field::Field::#constructor(#fname_str, #getter, #setter)
        }
    };

    let wire_key = meta
        .key
        .as_ref()
        .map(|key| quote! { .wire_key(#key) })
        .unwrap_or_default();
    let optional = (shape == FieldShape::Option)
        .then(|| quote! { .optional() })
        .unwrap_or_default();

    quote! {
        .field(#descriptor #wire_key #optional)
    }
}

fn finalize_call(name: &syn::Ident, meta: &StructMeta) -> TokenStream {
    if let Some(tag) = &meta.tag {
        let tag_key = meta.tag_key.clone().unwrap_or_else(|| "__type__".to_owned());
        quote! {
            .finalize(|_model: &#name, record: &mut ::remodel_core::record::Record| {
                record.insert(
                    #tag_key.to_owned(),
                    ::remodel_core::record::Value::String(#tag.to_owned()),
                );
            })
        }
    } else if let Some(path) = &meta.finalize {
        quote! { .finalize(#path) }
    } else {
        TokenStream::new()
    }
}

fn default_body(data: &Data, fields: &[&syn::Field]) -> TokenStream {
    let is_unit = matches!(
        data,
        Data::Struct(data) if matches!(data.fields, Fields::Unit)
    );
    if is_unit {
        return quote! { Self };
    }
    let inits = fields.iter().map(|field| {
        let fname = field.ident.as_ref().expect("named field");
        quote! { #fname: ::remodel_core::model::ModelDefault::model_default() }
    });
    quote! { Self { #(#inits),* } }
}
