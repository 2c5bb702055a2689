//! Type helper functions.

use quote::quote;
use syn::Type;

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Builder type name for a record: `Server` → `ServerBuilder`.
pub fn builder_ident(record: &syn::Ident) -> syn::Ident {
    syn::Ident::new(&format!("{record}Builder"), record.span())
}
