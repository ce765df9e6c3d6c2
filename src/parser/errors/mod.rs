//! Parser error handling module

mod error;

pub use error::ParseError;
