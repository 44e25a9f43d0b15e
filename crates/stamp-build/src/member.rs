use crate::{
    BuildError,
    helper::{attribute, ident, type_of},
};
use proc_macro2::TokenStream;
use quote::quote;
use stamp_core::synth::markers::{PRE_PERSIST, PRE_UPDATE};
use stamp_schema::{
    node::{Annotation, FieldDecl, MethodDecl, Statement},
    types::Visibility,
};

fn visibility(visibility: Visibility) -> TokenStream {
    match visibility {
        Visibility::Private => quote!(),
        Visibility::Package => quote!(pub(crate)),
        Visibility::Protected => quote!(pub(super)),
        Visibility::Public => quote!(pub),
    }
}

/// Lifecycle markers become trait impls rather than attributes.
pub fn is_lifecycle(annotation: &Annotation) -> bool {
    matches!(annotation.ty.as_str(), PRE_PERSIST | PRE_UPDATE)
}

fn attributes<'a>(
    annotations: impl Iterator<Item = &'a Annotation>,
) -> Result<Vec<TokenStream>, BuildError> {
    annotations.map(attribute).collect()
}

/// `#[..] created: Timestamp`
pub fn field(field: &FieldDecl) -> Result<TokenStream, BuildError> {
    let attrs = attributes(field.annotations.iter())?;
    let vis = visibility(field.modifiers.visibility);
    let name = ident(&field.name)?;
    let ty = type_of(&field.ty)?;

    Ok(quote! {
        #(#attrs)*
        #vis #name: #ty
    })
}

pub fn method(method: &MethodDecl, fields: &[&FieldDecl]) -> Result<TokenStream, BuildError> {
    let attrs = attributes(method.annotations.iter().filter(|a| !is_lifecycle(a)))?;
    let vis = visibility(method.modifiers.visibility);
    let name = ident(&method.name)?;

    let reads_only = !method.body.is_empty()
        && method
            .body
            .iter()
            .all(|s| matches!(s, Statement::ReturnField { .. }));
    let receiver = if reads_only {
        quote!(&self)
    } else {
        quote!(&mut self)
    };

    let mut params = Vec::with_capacity(method.params.len());
    for param in &method.params {
        let param_name = ident(&param.name)?;
        let param_ty = type_of(&param.ty)?;
        params.push(quote!(#param_name: #param_ty));
    }

    let ret = match &method.return_type {
        Some(ty) => {
            let ty = type_of(ty)?;
            quote!(-> #ty)
        }
        None => quote!(),
    };

    let body = method
        .body
        .iter()
        .map(|stmt| statement(&method.name, stmt, fields))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #(#attrs)*
        #vis fn #name(#receiver #(, #params)*) #ret {
            #(#body)*
        }
    })
}

fn statement(
    method: &str,
    stmt: &Statement,
    fields: &[&FieldDecl],
) -> Result<TokenStream, BuildError> {
    let field = fields
        .iter()
        .find(|f| f.name == stmt.field())
        .ok_or_else(|| BuildError::UnknownField {
            method: method.to_string(),
            field: stmt.field().to_string(),
        })?;
    let name = ident(&field.name)?;
    let ty = type_of(&field.ty)?;

    let tokens = match stmt {
        Statement::AssignNow { .. } => quote! {
            self.#name = <#ty>::now();
        },
        Statement::AssignNowIfUnset { .. } => quote! {
            if self.#name == <#ty>::EPOCH {
                self.#name = <#ty>::now();
            }
        },
        Statement::ReturnField { .. } => quote! {
            ::core::clone::Clone::clone(&self.#name)
        },
        Statement::AssignParam { param, .. } => {
            let param = ident(param)?;
            quote! {
                self.#name = #param;
            }
        }
    };

    Ok(tokens)
}
