// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for NMEA 0183 sentence types.
//!
//! This crate allows to `derive` a `Sentence` implementation for a record
//! struct and implements `TryFrom<&str>` on the record too. The generated
//! decoder reads one field per struct field, in declaration order, through
//! the crate's typed field reader.
//!
//! # Example
//!
//! Deriving an implementation on a heading sentence:
//!
//! ```ignore
//! #[derive(Sentence)]
//! #[nmea(sentence = "HDT")]
//! pub struct Hdt {
//!     pub sentence: RawSentence,
//!     #[nmea(name = "heading")]
//!     pub heading: f64,
//!     #[nmea(name = "heading reference", values("T"))]
//!     pub reference: String,
//! }
//! ```
//!
//! A field of type `RawSentence` receives the tokenized sentence and takes
//! no attribute. All other fields need `#[nmea(name = "...")]`; the field
//! index advances with each field and can be moved with
//! `#[nmea(index = n)]`. A coordinate split over a value and a hemisphere
//! field is marked `#[nmea(name = "...", position)]` and consumes two
//! indices.

use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit, LitStr, Meta, Token};

struct FieldAttributes {
    name: Option<LitStr>,
    index: Option<usize>,
    values: Vec<LitStr>,
    position: bool,
}

fn parse_field_attributes(field: &syn::Field) -> FieldAttributes {
    let mut attrs = FieldAttributes {
        name: None,
        index: None,
        values: Vec::new(),
        position: false,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident("nmea") {
            continue;
        }

        let metas = attr
            .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
            .expect("#[nmea(..)] attribute should parse");

        for meta in metas {
            match meta {
                // Handle #[nmea(name = "...")]
                Meta::NameValue(nv) if nv.path.is_ident("name") => {
                    if let Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }) = nv.value
                    {
                        attrs.name = Some(s);
                    }
                }
                // Handle #[nmea(index = n)]
                Meta::NameValue(nv) if nv.path.is_ident("index") => {
                    if let Expr::Lit(ExprLit {
                        lit: Lit::Int(i), ..
                    }) = nv.value
                    {
                        attrs.index = i.base10_parse().ok();
                    }
                }
                // Handle #[nmea(values("T", "F"))]
                Meta::List(list) if list.path.is_ident("values") => {
                    attrs.values = list
                        .parse_args_with(Punctuated::<LitStr, Token![,]>::parse_terminated)
                        .expect("values(..) should contain string literals")
                        .into_iter()
                        .collect();
                }
                // Handle #[nmea(position)]
                Meta::Path(path) if path.is_ident("position") => {
                    attrs.position = true;
                }
                _ => {}
            }
        }
    }

    attrs
}

/// Returns the last path segment of a type and, for a generic type like
/// `Option<f64>`, the last segment of its first type argument.
fn type_ident(ty: &syn::Type) -> Option<(String, Option<String>)> {
    let syn::Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    let inner = match &segment.arguments {
        syn::PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| {
            if let syn::GenericArgument::Type(syn::Type::Path(p)) = arg {
                p.path.segments.last().map(|s| s.ident.to_string())
            } else {
                None
            }
        }),
        _ => None,
    };
    Some((segment.ident.to_string(), inner))
}

/// Derive macro for implementing the `Sentence` trait.
///
/// Generates both the `Sentence` trait implementation and a `TryFrom<&str>`
/// implementation that tokenizes a raw line first.
#[proc_macro_derive(Sentence, attributes(nmea))]
pub fn derive_sentence(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    // Struct level #[nmea(sentence = "...")] carries the type identifier.
    let mut sentence_type: Option<LitStr> = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("nmea") {
            continue;
        }
        let metas = attr
            .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
            .expect("#[nmea(..)] attribute should parse");
        for meta in metas {
            if let Meta::NameValue(nv) = meta {
                if nv.path.is_ident("sentence") {
                    if let Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }) = nv.value
                    {
                        sentence_type = Some(s);
                    }
                }
            }
        }
    }
    let sentence_type =
        sentence_type.expect("Sentence derive needs a #[nmea(sentence = \"...\")] attribute");

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("Sentence derive only supports structs with named fields"),
        },
        _ => panic!("Sentence derive only supports structs"),
    };

    // Generate one typed reader call per field, advancing the field index.
    let mut metadata_field = None;
    let mut locals = Vec::new();
    let mut idents = Vec::new();
    let mut cursor: usize = 0;

    for field in fields {
        let ident = field.ident.as_ref().unwrap();
        let Some((ty, inner)) = type_ident(&field.ty) else {
            panic!("field `{ident}` has an unsupported type");
        };

        // The RawSentence field receives the tokenized sentence itself.
        if ty == "RawSentence" {
            metadata_field = Some(ident);
            continue;
        }

        let attrs = parse_field_attributes(field);
        let field_name = attrs
            .name
            .unwrap_or_else(|| panic!("field `{ident}` needs a #[nmea(name = \"...\")] attribute"));
        if let Some(index) = attrs.index {
            cursor = index;
        }
        let index = cursor;

        let call = if attrs.position {
            let hemisphere = index + 1;
            cursor += 2;
            quote! { fields.lat_long(#index, #hemisphere, #field_name) }
        } else {
            cursor += 1;
            match (ty.as_str(), inner.as_deref()) {
                ("Time", _) => quote! { fields.time(#index, #field_name) },
                ("Date", _) => quote! { fields.date(#index, #field_name) },
                ("f64", _) => quote! { fields.float64(#index, #field_name) },
                ("i64", _) => quote! { fields.int64(#index, #field_name) },
                ("Option", Some("f64")) => quote! { fields.opt_float64(#index, #field_name) },
                ("Option", Some("i64")) => quote! { fields.opt_int64(#index, #field_name) },
                ("String", _) if !attrs.values.is_empty() => {
                    let values = &attrs.values;
                    quote! { fields.enum_string(#index, #field_name, &[#(#values),*]) }
                }
                ("String", _) => quote! { fields.string(#index, #field_name) },
                _ => panic!("field `{ident}` has no NMEA field conversion for its type"),
            }
        };

        locals.push(quote! { let #ident = #call; });
        idents.push(ident);
    }

    let metadata = metadata_field.map(|ident| quote! { #ident: sentence, });

    let expanded = quote! {
        impl crate::sentence::Sentence for #name {
            const TYPE: &'static str = #sentence_type;

            fn decode(sentence: crate::sentence::RawSentence) -> Result<Self, crate::error::Error> {
                sentence.assert_type(Self::TYPE)?;
                let mut fields = crate::reader::FieldReader::new(&sentence);
                #(#locals)*
                fields.finish()?;
                Ok(Self {
                    #metadata
                    #(#idents),*
                })
            }
        }

        impl ::core::convert::TryFrom<&str> for #name {
            type Error = crate::error::Error;

            fn try_from(line: &str) -> Result<Self, crate::error::Error> {
                crate::sentence::RawSentence::parse(line)
                    .and_then(<Self as crate::sentence::Sentence>::decode)
            }
        }
    };

    TokenStream::from(expanded)
}
