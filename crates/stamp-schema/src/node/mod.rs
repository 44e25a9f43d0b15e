mod annotation;
mod field;
mod logical_path;
mod metadata_id;
mod method;
mod type_details;
mod type_path;

// pub use all node types
pub use self::annotation::*;
pub use self::field::*;
pub use self::logical_path::*;
pub use self::metadata_id::*;
pub use self::method::*;
pub use self::type_details::*;
pub use self::type_path::*;
