//! Renders a synthesized addition list into the source of a type's
//! companion file.

mod companion;
mod helper;
mod member;

pub use companion::{Companion, render};

use proc_macro2::TokenStream;
use stamp_core::addition::Additions;
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("'{0}' is not a valid identifier")]
    Ident(String),

    #[error("'{0}' is not a valid type")]
    Type(String),

    #[error("method '{method}' refers to unknown field '{field}'")]
    UnknownField { method: String, field: String },
}

/// The `impl` items for an addition list: hooks, accessors and the lifecycle
/// trait impls that call the hooks.
pub fn generate(additions: &Additions) -> Result<TokenStream, BuildError> {
    Ok(render(additions)?.methods)
}
