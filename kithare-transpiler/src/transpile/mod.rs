//! Lowering of Kithare syntax trees into C++ source
//!
//! The lowering is split by node family:
//! - `module`: compilation units and imports
//! - `types`: classes, structs, enums, type annotations and declarations
//! - `function`: function definitions and closures
//! - `body`: control flow and statements
//! - `expression`: operators, calls and constants
//!
//! Every public `transpile_*` entry point validates the node once and then
//! lowers it. The `lower_*` methods assume a validated tree.

mod body;
mod expression;
mod function;
mod module;
mod types;

use crate::config::TranspilerConfig;

/// Stateless C++ generator; one instance can lower any number of trees
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    config: TranspilerConfig,
}

impl Transpiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TranspilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranspilerConfig {
        &self.config
    }

    fn symbol(&self, name: &str) -> String {
        self.config.symbol(name)
    }
}
