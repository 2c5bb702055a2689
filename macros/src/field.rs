//! Field information structures and parsing.

use syn::{Data, DeriveInput, Fields, Type};

use crate::attr::{extract_doc_comment, get_custom_name};
use crate::types::type_to_string;

/// Parsed field information.
pub struct FieldInfo {
    pub ident: syn::Ident,
    /// Key in the file (section key, or section name for config fields).
    pub key: String,
    pub doc: String,
    pub ty: Type,
    pub type_name: String,
}

impl FieldInfo {
    /// Parse field info from a syn::Field, reading renames from `helper`.
    fn from_field(helper: &str, field: &syn::Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let key = get_custom_name(helper, &field.attrs)?.unwrap_or_else(|| unraw(&ident));

        // Section keys are lowercased when read, so an uppercase key could
        // be saved but never loaded back.
        if helper == "section" && key.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(syn::Error::new_spanned(
                field,
                format!(
                    "key `{key}` must be lowercase, keys are lowercased when read (try `{}`)",
                    key.to_ascii_lowercase()
                ),
            ));
        }

        Ok(Self {
            key,
            doc: extract_doc_comment(&field.attrs),
            type_name: type_to_string(&field.ty),
            ty: field.ty.clone(),
            ident,
        })
    }
}

/// `r#type` → `type`
fn unraw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
}

/// Collect the named fields of a plain, non-generic struct.
///
/// Keys must be unique within the record.
pub fn collect_fields(derive: &str, helper: &str, input: &DeriveInput) -> syn::Result<Vec<FieldInfo>> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            format!("{derive} cannot be derived for generic types"),
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    format!("{derive} only works on structs with named fields"),
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("{derive} only works on structs"),
            ));
        }
    };

    let infos = fields
        .iter()
        .map(|field| FieldInfo::from_field(helper, field))
        .collect::<syn::Result<Vec<_>>>()?;

    for (i, info) in infos.iter().enumerate() {
        if infos[..i].iter().any(|prev| prev.key == info.key) {
            return Err(syn::Error::new_spanned(
                &info.ident,
                format!("duplicate key `{}`", info.key),
            ));
        }
    }

    Ok(infos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_section_key_must_be_lowercase() {
        let renamed: DeriveInput = parse_quote! {
            struct Limits {
                #[section(name = "maxConn")]
                max_conn: u32,
            }
        };
        let err = collect_fields("Section", "section", &renamed).err().unwrap();
        assert!(err.to_string().contains("`maxConn` must be lowercase"));

        let plain: DeriveInput = parse_quote! {
            struct Limits {
                maxConn: u32,
            }
        };
        assert!(collect_fields("Section", "section", &plain).is_err());
    }

    #[test]
    fn test_lowercase_keys_accepted() {
        let input: DeriveInput = parse_quote! {
            struct Limits {
                #[section(name = "max-conn")]
                max_conn: u32,
                rate: u32,
            }
        };
        let fields = collect_fields("Section", "section", &input).unwrap();
        let keys: Vec<_> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["max-conn", "rate"]);
    }

    #[test]
    fn test_section_names_keep_case() {
        let input: DeriveInput = parse_quote! {
            struct App {
                #[config(name = "Server")]
                server: Server,
            }
        };
        let fields = collect_fields("Config", "config", &input).unwrap();
        assert_eq!(fields[0].key, "Server");
    }

    #[test]
    fn test_duplicate_key() {
        let input: DeriveInput = parse_quote! {
            struct Limits {
                #[section(name = "rate")]
                inbound: u32,
                rate: u32,
            }
        };
        assert!(collect_fields("Section", "section", &input).is_err());
    }
}
