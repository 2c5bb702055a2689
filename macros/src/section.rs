//! `#[derive(Section)]`: field declarations, raw conversion and a builder.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::attr::{SectionNameAttr, extract_doc_comment, parse_section_name};
use crate::builder::{field_decls, generate_builder};
use crate::field::collect_fields;
use crate::types::builder_ident;

pub fn derive(input: &DeriveInput) -> syn::Result<TokenStream> {
    let record = &input.ident;
    let record_name = record.to_string();
    let builder = builder_ident(record);

    let name = match parse_section_name(record, &input.attrs)? {
        SectionNameAttr::Fixed(lit) => quote! { iniconf::SectionName::Fixed(#lit) },
        SectionNameAttr::Auto => quote! { iniconf::SectionName::Auto },
    };
    let doc = extract_doc_comment(&input.attrs);
    let fields = collect_fields("Section", "section", input)?;

    let decls = field_decls(&fields);

    let decodes = fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let key = &f.key;
        quote! { #ident: iniconf::decode_field::<#ty>(raw, #key)?, }
    });

    let encodes = fields.iter().map(|f| {
        let ident = &f.ident;
        let key = &f.key;
        quote! { (#key, iniconf::IniValue::encode(&self.#ident)) }
    });

    let builder_code = generate_builder(
        input,
        &fields,
        quote! { <#record as iniconf::Section>::FIELDS },
        TokenStream::new(),
    );

    Ok(quote! {
        impl iniconf::FieldType for #record {}

        impl iniconf::Section for #record {
            const RECORD: &'static str = #record_name;
            const NAME: iniconf::SectionName = #name;
            const DOC: &'static str = #doc;
            const FIELDS: &'static [iniconf::FieldDecl] = &[#(#decls),*];

            type Builder = #builder;

            fn convert_raw(
                raw: &iniconf::RawSection,
            ) -> ::core::result::Result<#builder, iniconf::ConfigError> {
                iniconf::check_known_keys(<Self as iniconf::Section>::FIELDS, raw)?;
                ::core::result::Result::Ok(#builder {
                    #(#decodes)*
                })
            }

            fn encode_fields(&self) -> ::std::vec::Vec<(&'static str, ::std::string::String)> {
                ::std::vec![#(#encodes),*]
            }
        }

        #builder_code
    })
}
