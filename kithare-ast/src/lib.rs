// Kithare AST Library
// Syntax tree model, structural validation and debug representation for the Kithare language

pub mod ast;
pub mod error;
pub mod quote;
pub mod repr;
pub mod validate;

pub use ast::*;
pub use error::*;
pub use repr::{Repr, UNKNOWN_CONSTANT};
pub use validate::Validate;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;

/// Dump any node starting at nesting level zero
pub fn represent<T: Repr + ?Sized>(node: &T) -> String {
    node.repr(0)
}

// Version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
