pub(crate) mod helper_constants;
pub mod errors;
pub mod enums;
pub mod catalog;
pub mod phone_value;
pub mod composed;
pub mod codec;
pub mod validator;
pub mod field;

pub use enums::FieldPart;
pub use helper_constants::MAX_STORAGE_LENGTH;
