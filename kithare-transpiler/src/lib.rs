//! Kithare Transpiler
//!
//! Lowers Kithare syntax trees into C++ source text that compiles against the
//! shipped runtime header.
//!
//! ## Architecture
//!
//! - **Transpiler**: stateless generator with one `transpile_*` entry point per node family
//! - **Configuration**: every runtime-facing name (symbol prefix, module suffix, iterator method)
//! - **Runtime**: the `std.kh.hpp` header that generated code includes for `import std`
//!
//! Trees are validated before lowering; malformed trees and constructs C++ cannot
//! express are reported as `TranspileError` diagnostics.

pub mod config;
pub mod error;
mod join;
pub mod runtime;
pub mod transpile;

// Re-export public API
pub use config::TranspilerConfig;
pub use error::{TranspileError, TranspileResult};
pub use runtime::{header_file_name, STD_RUNTIME_HEADER};
pub use transpile::Transpiler;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;

/// Lower a module with the default configuration
pub fn transpile(module: &kithare_ast::Module) -> TranspileResult<String> {
    Transpiler::new().transpile_module(module)
}

// Version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
