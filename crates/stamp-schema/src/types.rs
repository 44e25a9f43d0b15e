use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// PathKind
///
/// The logical source set a type lives in. Together with a module name it
/// forms a `LogicalPath`.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[remain::sorted]
pub enum PathKind {
    Benches,
    Examples,
    Root,
    #[default]
    Src,
    Tests,
}

impl PathKind {
    /// Source sets whose types are compiled into the shipped artifact.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Src)
    }
}

///
/// Visibility
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Private,
    Package,
    Protected,
    Public,
}

impl Visibility {
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

///
/// TESTS
///
