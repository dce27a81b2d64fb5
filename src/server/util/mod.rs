pub mod money;
pub mod parse;
pub mod password;
pub mod validate;
