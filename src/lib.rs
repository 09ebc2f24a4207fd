pub mod errors;
pub mod handlers;   // form event callbacks
pub mod keywords;
pub mod options;
pub mod pointer;
pub mod schema;
pub mod validator;

pub use errors::{Error, Result};
pub use handlers::{Event, FormSession, Handler, Handlers};
pub use options::{KeywordPolicy, ValidatorOptions};
pub use pointer::{InstancePath, PathSegment};
pub use schema::context_schema;
pub use validator::{validate, validate_str, ErrorKind, ValidationError, ValidationResult, Validator};
