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

//! Expansion of `#[derive(Polymorphic)]`: an enum of newtype variants
//! over model types becomes a `MappedChoice` frozen in a `OnceLock`, plus
//! encode dispatch over the concrete variant.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

fn parse_enum_key(input: &DeriveInput) -> syn::Result<Option<String>> {
    let mut key = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("remodel") {
            continue;
        }
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("key") {
                let lit: LitStr = nested.value()?.parse()?;
                key = Some(lit.value());
            } else {
                return Err(nested.error("unrecognized remodel enum attribute"));
            }
            Ok(())
        })?;
    }

    Ok(key)
}

fn parse_variant_tag(variant: &syn::Variant) -> syn::Result<String> {
    let mut tag = None;

    for attr in &variant.attrs {
        if !attr.path().is_ident("remodel") {
            continue;
        }
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("tag") {
                let lit: LitStr = nested.value()?.parse()?;
                tag = Some(lit.value());
            } else {
                return Err(nested.error("unrecognized remodel variant attribute"));
            }
            Ok(())
        })?;
    }

    Ok(tag.unwrap_or_else(|| variant.ident.to_string()))
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "generic polymorphic enums are not supported",
        ));
    }

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "`#[derive(Polymorphic)]` supports enums of newtype variants over model types",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "a polymorphic enum needs at least one variant",
        ));
    }

    let name = &input.ident;

    let mut variant_calls = Vec::with_capacity(data.variants.len());
    let mut encode_arms = Vec::with_capacity(data.variants.len());
    let mut first_variant = None;

    for variant in &data.variants {
        let vname = &variant.ident;
        let inner = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "polymorphic variants must be single-field newtypes over model types",
                ));
            }
        };
        let tag = parse_variant_tag(variant)?;

        variant_calls.push(quote! {
            .variant_with(#tag, |record: &::remodel_core::record::Record| {
                <#inner as ::remodel_core::model::Model>::decode(record).map(#name::#vname)
            })
        });
        encode_arms.push(quote! {
            #name::#vname(inner) => ::remodel_core::model::Model::encode(inner),
        });
        if first_variant.is_none() {
            first_variant = Some((vname, inner));
        }
    }

    let constructor = match parse_enum_key(input)? {
        Some(key) => quote! { with_key(#key) },
        None => quote! { new() },
    };

    let (first_vname, first_inner) = first_variant.expect("at least one variant");

    Ok(quote! {
        impl ::remodel_core::model::ModelDefault for #name {
            fn model_default() -> Self {
                #name::#first_vname(
                    <#first_inner as ::remodel_core::model::ModelDefault>::model_default(),
                )
            }
        }

        impl ::remodel_core::choice::Polymorphic for #name {
            fn choice() -> &'static dyn ::remodel_core::choice::ModelChoice<Self> {
                static CHOICE: ::std::sync::OnceLock<::remodel_core::choice::MappedChoice<#name>> =
                    ::std::sync::OnceLock::new();
                CHOICE.get_or_init(|| {
                    ::remodel_core::choice::MappedChoice::#constructor
                        #(#variant_calls)*
                })
            }

            fn encode_record(&self) -> ::remodel_core::record::Record {
                match self {
                    #(#encode_arms)*
                }
            }
        }
    })
}
