//! The standard runtime header shipped next to generated code

use crate::config::DEFAULT_HEADER_EXTENSION;

/// Contents of `std.kh.hpp`, the header behind `import std`
pub const STD_RUNTIME_HEADER: &str = include_str!("../runtime/std.kh.hpp");

/// Header file name for a module path, `["std"]` gives `std.kh.hpp`
pub fn header_file_name<S: AsRef<str>>(path: &[S]) -> String {
    header_path(path, DEFAULT_HEADER_EXTENSION)
}

pub(crate) fn header_path<S: AsRef<str>>(path: &[S], extension: &str) -> String {
    let segments: Vec<&str> = path.iter().map(AsRef::as_ref).collect();
    format!("{}{}", segments.join("/"), extension)
}
