//! Error types for the Kithare transpiler
//!
//! Follows the miette patterns of the syntax tree crate so both report alike.

use kithare_ast::{AstError, Span};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Why a tree could not be lowered to C++
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TranspileError {
    #[error("Unsupported construct: {construct}")]
    #[diagnostic(code(kithare::transpile::unsupported_construct), help("{reason}"))]
    UnsupportedConstruct {
        construct: String,
        reason: String,
        #[label("cannot be lowered to C++")]
        span: SourceSpan,
    },

    #[error("Malformed syntax tree")]
    #[diagnostic(code(kithare::transpile::malformed_ast))]
    MalformedAst(#[from] AstError),
}

impl TranspileError {
    pub fn unsupported(construct: impl Into<String>, reason: impl Into<String>, span: Span) -> Self {
        Self::UnsupportedConstruct {
            construct: construct.into(),
            reason: reason.into(),
            span: span.into(),
        }
    }
}

pub type TranspileResult<T> = Result<T, TranspileError>;
