use crate::{
    BuildError,
    helper::{ident, type_of},
    member::{self, is_lifecycle},
};
use proc_macro2::TokenStream;
use quote::quote;
use stamp_core::{
    addition::Additions,
    provider::companion_file_name,
    synth::markers::{PRE_PERSIST, PRE_UPDATE},
};
use stamp_schema::node::{FieldDecl, TypePath};

///
/// Companion
///
/// Generated source for one type. `fields` is spliced into the type's
/// definition by the host; `methods` is a standalone `impl` block plus the
/// lifecycle trait impls.
///

#[derive(Clone, Debug)]
pub struct Companion {
    pub file_name: String,
    pub type_path: TypePath,
    pub fields: TokenStream,
    pub methods: TokenStream,
}

impl Companion {
    /// Source text of the companion file.
    #[must_use]
    pub fn to_source(&self) -> String {
        self.methods.to_string()
    }

    /// Source text of the field fragment.
    #[must_use]
    pub fn field_source(&self) -> String {
        self.fields.to_string()
    }
}

pub fn render(additions: &Additions) -> Result<Companion, BuildError> {
    let type_path = additions.type_path().clone();
    let target = type_of(&type_path)?;
    let fields: Vec<&FieldDecl> = additions.fields().collect();

    let field_tokens = fields
        .iter()
        .map(|f| member::field(f))
        .collect::<Result<Vec<_>, _>>()?;

    let mut method_tokens = Vec::new();
    for method in additions.methods() {
        method_tokens.push(member::method(method, &fields)?);
    }

    let lifecycle = lifecycle_impls(additions, &target)?;

    let methods = quote! {
        #[allow(non_snake_case)]
        impl #target {
            #(#method_tokens)*
        }

        #lifecycle
    };

    Ok(Companion {
        file_name: companion_file_name(&type_path),
        type_path,
        fields: quote!(#(#field_tokens),*),
        methods,
    })
}

// One impl per lifecycle trait, calling every hook that carries its marker
// in emission order.
fn lifecycle_impls(additions: &Additions, target: &syn::Type) -> Result<TokenStream, BuildError> {
    let mut tokens = quote!();

    for (marker, trait_name, fn_name) in [
        (PRE_PERSIST, quote!(PrePersist), quote!(pre_persist)),
        (PRE_UPDATE, quote!(PreUpdate), quote!(pre_update)),
    ] {
        let hooks = additions
            .methods()
            .filter(|m| {
                m.annotations
                    .iter()
                    .any(|a| is_lifecycle(a) && a.ty.as_str() == marker)
            })
            .map(|m| ident(&m.name))
            .collect::<Result<Vec<_>, _>>()?;

        if hooks.is_empty() {
            continue;
        }

        tokens.extend(quote! {
            impl ::stamp::#trait_name for #target {
                fn #fn_name(&mut self) {
                    #(self.#hooks();)*
                }
            }
        });
    }

    Ok(tokens)
}
