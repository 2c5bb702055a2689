//! Proc macros for iniconf.
//!
//! # Section derive macro
//!
//! ```ignore
//! /// Listening socket.
//! #[derive(Section)]
//! #[section(name = "server")]
//! pub struct Server {
//!     /// Bind address.
//!     pub host: String,
//!     pub port: u16,
//!     #[section(name = "debug-mode")]
//!     pub debug: Option<bool>,
//! }
//!
//! // Generates:
//! // - impl Section for Server (RECORD, NAME, DOC, FIELDS, convert_raw, encode_fields)
//! // - ServerBuilder with one setter per field
//! ```
//!
//! # Config derive macro
//!
//! ```ignore
//! #[derive(Config)]
//! pub struct AppConfig {
//!     pub server: Server,
//!     #[config(name = "rate-limits")]
//!     pub limits: Limits,
//! }
//!
//! // Generates:
//! // - impl Config for AppConfig (RECORD, FIELDS, MEMBERS, from_sections, to_sections)
//! // - AppConfigBuilder with one setter per section
//! ```
//!
//! # Attributes
//!
//! Struct-level (Section, exactly one required):
//! - `#[section(name = "x")]` - Fixed section name
//! - `#[section(auto)]` - Take the name of the config field holding it
//!
//! Field-level:
//! - `#[section(name = "x")]` / `#[config(name = "x")]` - Custom key or section name

mod attr;
mod builder;
mod config;
mod field;
mod section;
mod types;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro implementing `iniconf::Section` and a builder.
#[proc_macro_derive(Section, attributes(section))]
pub fn derive_section(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    section::derive(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro implementing `iniconf::Config` and a builder.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
