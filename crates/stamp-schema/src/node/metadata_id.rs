use crate::{MID_PREFIX, prelude::*};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

const CLASS_SEPARATOR: char = '#';
const TYPE_SEPARATOR: char = '?';

///
/// MetadataIdError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MetadataIdError {
    #[error("metadata identifier is empty")]
    Empty,

    #[error("metadata identifier '{id}' does not start with 'MID:'")]
    MissingPrefix { id: String },

    #[error("metadata identifier '{id}' has no class separator '#'")]
    MissingClass { id: String },

    #[error("metadata identifier '{id}' has no type separator '?'")]
    MissingType { id: String },

    #[error("metadata identifier '{id}' has an empty class")]
    EmptyClass { id: String },

    #[error("metadata identifier class '{found}' does not match '{expected}'")]
    ClassMismatch { expected: String, found: String },

    #[error(transparent)]
    Path(#[from] LogicalPathError),

    #[error(transparent)]
    Type(#[from] TypePathError),
}

///
/// MetadataClass
///
/// Names a family of metadata identifiers (the physical type family, or the
/// family a given synthesizer provides) and creates/inspects ids in it.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MetadataClass(&'static str);

impl MetadataClass {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }

    /// The class-level identifier (`MID:<class>`), used for dependency registration.
    #[must_use]
    pub fn class_id(self) -> String {
        format!("{MID_PREFIX}{}", self.0)
    }

    #[must_use]
    pub fn create_identifier(self, ty: &TypePath, path: &LogicalPath) -> MetadataId {
        MetadataId {
            class: self.0.to_string(),
            path: path.clone(),
            ty: ty.clone(),
        }
    }

    /// Parse an identifier and require that it belongs to this class.
    pub fn parse(self, id: &str) -> Result<MetadataId, MetadataIdError> {
        let parsed = MetadataId::parse(id)?;
        if parsed.class != self.0 {
            return Err(MetadataIdError::ClassMismatch {
                expected: self.0.to_string(),
                found: parsed.class,
            });
        }

        Ok(parsed)
    }

    #[must_use]
    pub fn is_valid(self, id: &str) -> bool {
        self.parse(id).is_ok()
    }

    pub fn type_of(self, id: &str) -> Result<TypePath, MetadataIdError> {
        self.parse(id).map(|id| id.ty)
    }

    pub fn path_of(self, id: &str) -> Result<LogicalPath, MetadataIdError> {
        self.parse(id).map(|id| id.path)
    }
}

///
/// PHYSICAL_TYPE
/// the class of identifiers naming a type's own (hand-written) declaration
///

pub const PHYSICAL_TYPE: MetadataClass = MetadataClass::new("stamp.PhysicalType");

///
/// MetadataId
///
/// `MID:<class>#<logical-path>?<type-path>`. Deterministic in its inputs, so
/// the same type in the same source set always maps to the same id.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct MetadataId {
    class: String,
    path: LogicalPath,
    ty: TypePath,
}

impl MetadataId {
    pub fn parse(id: &str) -> Result<Self, MetadataIdError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(MetadataIdError::Empty);
        }

        let rest = id
            .strip_prefix(MID_PREFIX)
            .ok_or_else(|| MetadataIdError::MissingPrefix { id: id.to_string() })?;
        let (class, rest) = rest
            .split_once(CLASS_SEPARATOR)
            .ok_or_else(|| MetadataIdError::MissingClass { id: id.to_string() })?;
        let (path, ty) = rest
            .split_once(TYPE_SEPARATOR)
            .ok_or_else(|| MetadataIdError::MissingType { id: id.to_string() })?;

        if class.is_empty() {
            return Err(MetadataIdError::EmptyClass { id: id.to_string() });
        }

        Ok(Self {
            class: class.to_string(),
            path: path.parse()?,
            ty: ty.parse()?,
        })
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    #[must_use]
    pub fn is_class(&self, class: MetadataClass) -> bool {
        self.class == class.name()
    }

    #[must_use]
    pub const fn type_path(&self) -> &TypePath {
        &self.ty
    }

    #[must_use]
    pub const fn logical_path(&self) -> &LogicalPath {
        &self.path
    }

    /// Same type and path, re-homed into another class.
    #[must_use]
    pub fn with_class(&self, class: MetadataClass) -> Self {
        class.create_identifier(&self.ty, &self.path)
    }
}

impl fmt::Display for MetadataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{MID_PREFIX}{}{CLASS_SEPARATOR}{}{TYPE_SEPARATOR}{}",
            self.class, self.path, self.ty
        )
    }
}

impl FromStr for MetadataId {
    type Err = MetadataIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MetadataId {
    type Error = MetadataIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MetadataId> for String {
    fn from(id: MetadataId) -> Self {
        id.to_string()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET: MetadataClass = MetadataClass::new("stamp.test.Widget");

    fn order() -> TypePath {
        TypePath::try_from_str("app::model::Order").expect("valid path")
    }

    #[test]
    fn create_renders_stable_grammar() {
        let id = WIDGET.create_identifier(&order(), &LogicalPath::root(PathKind::Src));

        assert_eq!(id.to_string(), "MID:stamp.test.Widget#Src?app::model::Order");
        assert_eq!(
            id,
            WIDGET.create_identifier(&order(), &LogicalPath::root(PathKind::Src)),
            "creation must be deterministic"
        );
    }

    #[test]
    fn identifier_services_recover_type_and_path() {
        let path = LogicalPath::new("billing", PathKind::Tests).expect("valid module");
        let id = WIDGET.create_identifier(&order(), &path).to_string();

        assert!(WIDGET.is_valid(&id));
        assert_eq!(WIDGET.type_of(&id), Ok(order()));
        assert_eq!(WIDGET.path_of(&id), Ok(path));
    }

    #[test]
    fn class_mismatch_is_invalid() {
        let id = PHYSICAL_TYPE
            .create_identifier(&order(), &LogicalPath::root(PathKind::Src))
            .to_string();

        assert!(!WIDGET.is_valid(&id));
        assert!(matches!(
            WIDGET.parse(&id),
            Err(MetadataIdError::ClassMismatch { .. })
        ));
    }

    #[test]
    fn malformed_identifiers_are_rejected() {
        assert_eq!(MetadataId::parse(""), Err(MetadataIdError::Empty));
        assert!(matches!(
            MetadataId::parse("stamp.test.Widget#Src?app::Order"),
            Err(MetadataIdError::MissingPrefix { .. })
        ));
        assert!(matches!(
            MetadataId::parse("MID:stamp.test.Widget"),
            Err(MetadataIdError::MissingClass { .. })
        ));
        assert!(matches!(
            MetadataId::parse("MID:stamp.test.Widget#Src"),
            Err(MetadataIdError::MissingType { .. })
        ));
        assert!(matches!(
            MetadataId::parse("MID:#Src?app::Order"),
            Err(MetadataIdError::EmptyClass { .. })
        ));
        assert!(matches!(
            MetadataId::parse("MID:stamp.test.Widget#Src?"),
            Err(MetadataIdError::Type(TypePathError::Empty))
        ));
    }

    #[test]
    fn with_class_keeps_type_and_path() {
        let local = WIDGET.create_identifier(&order(), &LogicalPath::root(PathKind::Src));
        let governor = local.with_class(PHYSICAL_TYPE);

        assert!(governor.is_class(PHYSICAL_TYPE));
        assert_eq!(governor.type_path(), local.type_path());
        assert_eq!(governor.logical_path(), local.logical_path());
    }
}
