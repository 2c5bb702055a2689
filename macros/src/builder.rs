//! Builder generation shared by both derives.
//!
//! ```ignore
//! #[derive(Default)]
//! pub struct ServerBuilder {
//!     host: Option<String>,
//!     debug: Option<Option<bool>>,
//! }
//!
//! impl ServerBuilder {
//!     pub fn host(mut self, value: String) -> Self { ... }
//! }
//!
//! impl iniconf::Builder for ServerBuilder {
//!     type Output = Server;
//!     fn build(self) -> Result<Server, ConfigError> {
//!         iniconf::check_required("Server", FIELDS, &[self.host.is_some(), ...])?;
//!         Ok(Server { host: iniconf::take_field(self.host, "Server", "host")?, ... })
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::field::FieldInfo;
use crate::types::builder_ident;

/// Generate the builder struct and its `iniconf::Builder` impl.
///
/// `fields_const` is the path of the record's `FIELDS` constant and
/// `precheck` runs at the start of `build()`.
pub fn generate_builder(
    input: &DeriveInput,
    fields: &[FieldInfo],
    fields_const: TokenStream,
    precheck: TokenStream,
) -> TokenStream {
    let record = &input.ident;
    let record_name = record.to_string();
    let vis = &input.vis;
    let builder = builder_ident(record);
    let builder_doc = format!("Incremental constructor for [`{record}`].");

    let slots = fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        quote! { #ident: ::core::option::Option<#ty>, }
    });

    let setters = fields.iter().map(|f| {
        let ident = &f.ident;
        let ty = &f.ty;
        quote! {
            #vis fn #ident(mut self, value: #ty) -> Self {
                self.#ident = ::core::option::Option::Some(value);
                self
            }
        }
    });

    let present = fields.iter().map(|f| {
        let ident = &f.ident;
        quote! { self.#ident.is_some() }
    });

    let takes = fields.iter().map(|f| {
        let ident = &f.ident;
        let key = &f.key;
        quote! { #ident: iniconf::take_field(self.#ident, #record_name, #key)?, }
    });

    quote! {
        #[doc = #builder_doc]
        #[derive(Default)]
        #vis struct #builder {
            #(#slots)*
        }

        impl #builder {
            #(#setters)*
        }

        impl iniconf::Builder for #builder {
            type Output = #record;

            fn build(self) -> ::core::result::Result<#record, iniconf::ConfigError> {
                #precheck
                iniconf::check_required(#record_name, #fields_const, &[#(#present),*])?;
                ::core::result::Result::Ok(#record {
                    #(#takes)*
                })
            }
        }
    }
}

/// `FIELDS` entries: key, type name, optionality and doc per field.
pub fn field_decls(fields: &[FieldInfo]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f| {
            let key = &f.key;
            let ty = &f.ty;
            let type_name = &f.type_name;
            let doc = &f.doc;
            quote! {
                iniconf::FieldDecl::new(#key, #type_name, iniconf::is_optional::<#ty>(), #doc)
            }
        })
        .collect()
}
