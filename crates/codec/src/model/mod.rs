//! Structural type model shared by the recwire codecs.

pub mod tag;
pub mod types;
pub mod validator;

pub use tag::describe;
pub use types::{TypeModel, Value};
pub use validator::{ModelValidator, SchemaError};
