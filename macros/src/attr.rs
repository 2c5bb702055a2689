//! Attribute parsing helpers shared by both derives.

use syn::{Attribute, Lit, LitStr, Meta};

/// Section name declared on a `#[derive(Section)]` struct.
pub enum SectionNameAttr {
    Fixed(LitStr),
    Auto,
}

/// Parse `#[section(name = "...")]` or `#[section(auto)]` on the struct.
///
/// Exactly one of the two must appear.
pub fn parse_section_name(ident: &syn::Ident, attrs: &[Attribute]) -> syn::Result<SectionNameAttr> {
    let mut name: Option<LitStr> = None;
    let mut auto = false;

    for attr in attrs.iter().filter(|a| a.path().is_ident("section")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("section name must not be empty"));
                }
                name = Some(lit);
                Ok(())
            } else if meta.path.is_ident("auto") {
                auto = true;
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"` or `auto`"))
            }
        })?;
    }

    match (name, auto) {
        (Some(lit), false) => Ok(SectionNameAttr::Fixed(lit)),
        (None, true) => Ok(SectionNameAttr::Auto),
        (Some(lit), true) => Err(syn::Error::new(
            lit.span(),
            "`name` and `auto` cannot be combined",
        )),
        (None, false) => Err(syn::Error::new(
            ident.span(),
            "missing section name: add #[section(name = \"...\")] or #[section(auto)]",
        )),
    }
}

/// Get a custom key from `#[<helper>(name = "...")]` on a field.
pub fn get_custom_name(helper: &str, attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut value = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident(helper)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;
    }
    Ok(value)
}

/// Reject a helper attribute where it has no meaning.
pub fn forbid(helper: &str, attrs: &[Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|a| a.path().is_ident(helper)) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            format!("`#[{helper}(...)]` is not supported here"),
        )),
        None => Ok(()),
    }
}

/// Extract doc comment from #[doc = "..."] attributes.
pub fn extract_doc_comment(attrs: &[Attribute]) -> String {
    let docs: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(expr_lit) => match &expr_lit.lit {
                    Lit::Str(s) => Some(s.value()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect();

    docs.iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
