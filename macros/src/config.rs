//! `#[derive(Config)]`: schema members, section loading and a builder.
//!
//! Every field type must implement `iniconf::Section`; this is checked at
//! compile time through `MemberDecl::section::<T>`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::attr::forbid;
use crate::builder::{field_decls, generate_builder};
use crate::field::collect_fields;
use crate::types::builder_ident;

pub fn derive(input: &DeriveInput) -> syn::Result<TokenStream> {
    forbid("config", &input.attrs)?;

    let record = &input.ident;
    let record_name = record.to_string();
    let builder = builder_ident(record);
    let fields = collect_fields("Config", "config", input)?;

    let decls = field_decls(&fields);

    let members = fields.iter().map(|f| {
        let ty = &f.ty;
        let key = &f.key;
        quote! { iniconf::MemberDecl::section::<#ty>(#key) }
    });

    let loads = fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let key = &f.key;
        quote! { .#ident(loader.load::<#ty>(#key)?) }
    });

    let stores = fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        let key = &f.key;
        quote! { writer.store::<#ty>(#key, &self.#ident)?; }
    });

    let builder_code = generate_builder(
        input,
        &fields,
        quote! { <#record as iniconf::Config>::FIELDS },
        // section names are checked before any instance exists
        quote! { <#record as iniconf::Config>::schema()?; },
    );

    Ok(quote! {
        impl iniconf::Config for #record {
            const RECORD: &'static str = #record_name;
            const FIELDS: &'static [iniconf::FieldDecl] = &[#(#decls),*];
            const MEMBERS: &'static [iniconf::MemberDecl] = &[#(#members),*];

            type Builder = #builder;

            #[allow(unused_variables)]
            fn from_sections(
                loader: &iniconf::SectionLoader<'_>,
            ) -> ::core::result::Result<Self, iniconf::ConfigError> {
                let builder = <Self as iniconf::Config>::builder() #(#loads)*;
                iniconf::Builder::build(builder)
            }

            #[allow(unused_variables)]
            fn to_sections(
                &self,
                writer: &mut iniconf::SectionWriter<'_>,
            ) -> ::core::result::Result<(), iniconf::ConfigError> {
                #(#stores)*
                ::core::result::Result::Ok(())
            }
        }

        #builder_code
    })
}
