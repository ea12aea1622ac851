pub mod common;
pub mod json;
pub mod message;
