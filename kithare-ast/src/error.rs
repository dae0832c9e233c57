// Kithare AST Error Handling
// Structural invariant violations in trees handed over by the parser

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A tree that breaks one of the structural invariants of the AST
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AstError {
    #[error("Dict has {keys} keys but {items} items")]
    #[diagnostic(
        code(kithare::ast::dict_arity),
        help("Every dict key needs exactly one item")
    )]
    DictArity {
        keys: usize,
        items: usize,
        #[label("malformed dict")]
        span: SourceSpan,
    },

    #[error("Comparison has {operators} operators but {values} values")]
    #[diagnostic(
        code(kithare::ast::comparison_arity),
        help("A chained comparison needs exactly one more value than operators")
    )]
    ComparisonArity {
        operators: usize,
        values: usize,
        #[label("malformed comparison")]
        span: SourceSpan,
    },

    #[error("Enum {name} has {members} members but {values} values")]
    #[diagnostic(
        code(kithare::ast::enum_arity),
        help("Every enum member needs exactly one value")
    )]
    EnumArity {
        name: String,
        members: usize,
        values: usize,
        #[label("malformed enum")]
        span: SourceSpan,
    },

    #[error("Foreach loop has no targets")]
    #[diagnostic(
        code(kithare::ast::empty_foreach_targets),
        help("A foreach loop declares at least one target variable")
    )]
    EmptyForEachTargets {
        #[label("foreach without targets")]
        span: SourceSpan,
    },

    #[error("Struct {name} declares methods")]
    #[diagnostic(
        code(kithare::ast::struct_methods),
        help("Only classes carry methods; use a class instead")
    )]
    StructMethods {
        name: String,
        #[label("struct with methods")]
        span: SourceSpan,
    },
}

pub type AstResult<T> = Result<T, AstError>;
