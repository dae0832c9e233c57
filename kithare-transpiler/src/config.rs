//! Runtime-facing names used by the generated C++
//!
//! The defaults match the shipped `std.kh.hpp` header.

pub const DEFAULT_SYMBOL_PREFIX: &str = "kh_";
pub const DEFAULT_MODULE_SUFFIX: &str = "_mod";
pub const DEFAULT_HEADER_EXTENSION: &str = ".kh.hpp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspilerConfig {
    /// Prepended to every user type, function and module symbol
    pub symbol_prefix: String,
    /// Appended to an imported module's name to get its wrapper class
    pub module_suffix: String,
    pub header_extension: String,
    /// Function the generated `main` hands control to
    pub entry_symbol: String,
    /// Iterator protocol method called by foreach loops
    ///
    /// Class methods with this name are emitted without the symbol prefix so
    /// user classes can be iterated.
    pub iterate_method: String,
    pub void_type: String,
}

impl Default for TranspilerConfig {
    fn default() -> Self {
        Self {
            symbol_prefix: DEFAULT_SYMBOL_PREFIX.to_string(),
            module_suffix: DEFAULT_MODULE_SUFFIX.to_string(),
            header_extension: DEFAULT_HEADER_EXTENSION.to_string(),
            entry_symbol: "main".to_string(),
            iterate_method: "iterate".to_string(),
            void_type: "void".to_string(),
        }
    }
}

impl TranspilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.symbol_prefix = prefix.into();
        self
    }

    pub fn with_module_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.module_suffix = suffix.into();
        self
    }

    pub fn with_header_extension(mut self, extension: impl Into<String>) -> Self {
        self.header_extension = extension.into();
        self
    }

    pub fn with_entry_symbol(mut self, entry: impl Into<String>) -> Self {
        self.entry_symbol = entry.into();
        self
    }

    pub fn with_iterate_method(mut self, method: impl Into<String>) -> Self {
        self.iterate_method = method.into();
        self
    }

    pub fn with_void_type(mut self, void_type: impl Into<String>) -> Self {
        self.void_type = void_type.into();
        self
    }

    /// Prefixed C++ symbol for a Kithare name
    pub fn symbol(&self, name: &str) -> String {
        format!("{}{}", self.symbol_prefix, name)
    }
}
