use crate::BuildError;
use proc_macro2::TokenStream;
use quote::quote;
use stamp_schema::node::{Annotation, AttrValue, TypePath};
use syn::{Ident, Path, Type, parse_str};

pub fn ident(name: &str) -> Result<Ident, BuildError> {
    parse_str(name).map_err(|_| BuildError::Ident(name.to_string()))
}

pub fn type_of(ty: &TypePath) -> Result<Type, BuildError> {
    parse_str(ty.as_str()).map_err(|_| BuildError::Type(ty.to_string()))
}

fn path_of(ty: &TypePath) -> Result<Path, BuildError> {
    parse_str(ty.as_str()).map_err(|_| BuildError::Type(ty.to_string()))
}

/// Markers render as inert doc text: `#[doc = "path(name = value, ..)"]`.
pub fn attribute(annotation: &Annotation) -> Result<TokenStream, BuildError> {
    let text = marker_text(annotation)?;

    Ok(quote!(#[doc = #text]))
}

/// `path` or `path(name = value, ..)`, with string values quoted.
fn marker_text(annotation: &Annotation) -> Result<String, BuildError> {
    path_of(&annotation.ty)?;
    if annotation.attributes.is_empty() {
        return Ok(annotation.ty.to_string());
    }

    let mut args = Vec::with_capacity(annotation.attributes.len());
    for attr in &annotation.attributes {
        ident(&attr.name)?;
        let value = match &attr.value {
            AttrValue::Str(s) => format!("{s:?}"),
            AttrValue::Enum { ty, constant } => {
                path_of(ty)?;
                ident(constant)?;
                format!("{ty}::{constant}")
            }
        };
        args.push(format!("{} = {value}", attr.name));
    }

    Ok(format!("{}({})", annotation.ty, args.join(", ")))
}
