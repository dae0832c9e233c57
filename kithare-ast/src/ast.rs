// Kithare AST Definitions
// Syntax tree nodes handed over by the parser, read by the representation and the lowering

use std::sync::Arc;

/// Source position information for AST nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub start_line_col: Option<(usize, usize)>,
    pub end_line_col: Option<(usize, usize)>,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            start_line_col: None,
            end_line_col: None,
        }
    }

    pub fn with_line_col(
        start: usize,
        end: usize,
        start_line_col: (usize, usize),
        end_line_col: (usize, usize),
    ) -> Self {
        Self {
            start,
            end,
            start_line_col: Some(start_line_col),
            end_line_col: Some(end_line_col),
        }
    }

    /// Convert to a miette label span
    pub fn to_source_span(&self) -> miette::SourceSpan {
        miette::SourceSpan::new(self.start.into(), self.end.saturating_sub(self.start))
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        span.to_source_span()
    }
}

/// One compilation unit
///
/// Every list slot may be `None` when the parser elided an optional part of the
/// grammar. Consumers skip such slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub imports: Vec<Option<Import>>,
    pub variables: Vec<Option<Declaration>>,
    pub enums: Vec<Option<EnumType>>,
    pub structs: Vec<Option<UserType>>,
    pub functions: Vec<Option<Function>>,
    pub classes: Vec<Option<UserType>>,
    pub span: Span,
}

impl Module {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            ..Self::default()
        }
    }
}

/// `import a.b as c;` or `include a.b;`
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub is_include: bool,
    pub is_relative: bool,
    pub path: Vec<String>,
    /// Binding name, empty for includes
    pub identifier: String,
    pub span: Span,
}

impl Import {
    pub fn import<S: Into<String>>(
        path: impl IntoIterator<Item = S>,
        identifier: impl Into<String>,
        is_relative: bool,
        span: Span,
    ) -> Self {
        Self {
            is_include: false,
            is_relative,
            path: path.into_iter().map(Into::into).collect(),
            identifier: identifier.into(),
            span,
        }
    }

    pub fn include<S: Into<String>>(
        path: impl IntoIterator<Item = S>,
        is_relative: bool,
        span: Span,
    ) -> Self {
        Self {
            is_include: true,
            is_relative,
            path: path.into_iter().map(Into::into).collect(),
            identifier: String::new(),
            span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTypeKind {
    Class,
    Struct,
}

impl UserTypeKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            UserTypeKind::Class => "class",
            UserTypeKind::Struct => "struct",
        }
    }
}

/// Class or struct definition
#[derive(Debug, Clone, PartialEq)]
pub struct UserType {
    pub kind: UserTypeKind,
    pub identifiers: Vec<String>,
    /// Base types may be the very same node another user type points at
    pub bases: Vec<Option<Arc<Identifier>>>,
    pub generic_params: Vec<String>,
    pub members: Vec<Option<Declaration>>,
    /// Always empty for structs
    pub methods: Vec<Option<Function>>,
    pub span: Span,
}

impl UserType {
    pub fn new<S: Into<String>>(
        kind: UserTypeKind,
        identifiers: impl IntoIterator<Item = S>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            bases: Vec::new(),
            generic_params: Vec::new(),
            members: Vec::new(),
            methods: Vec::new(),
            span,
        }
    }

    pub fn is_class(&self) -> bool {
        self.kind == UserTypeKind::Class
    }
}

/// Enumeration with explicit member values
///
/// `members` and `values` are parallel; `Validate` rejects a length mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub identifiers: Vec<String>,
    /// Underlying type, e.g. `enum Flags(ubyte)`; not lowered to C++
    pub base: Option<Arc<Identifier>>,
    pub members: Vec<String>,
    pub values: Vec<u64>,
    pub span: Span,
}

impl EnumType {
    pub fn new<S: Into<String>>(identifiers: impl IntoIterator<Item = S>, span: Span) -> Self {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            base: None,
            members: Vec::new(),
            values: Vec::new(),
            span,
        }
    }

    pub fn with_base(mut self, base: Arc<Identifier>) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_member(mut self, name: impl Into<String>, value: u64) -> Self {
        self.members.push(name.into());
        self.values.push(value);
        self
    }

    /// Member/value pairs in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.members
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

// === BODIES ===

/// Statement-level node
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub span: Span,
}

impl Body {
    pub fn new(kind: BodyKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl From<Expression> for Body {
    fn from(expression: Expression) -> Self {
        let span = expression.span;
        Body::new(BodyKind::Expression(expression), span)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyKind {
    Expression(Expression),
    If(If),
    While(While),
    DoWhile(DoWhile),
    For(For),
    ForEach(ForEach),
    Statement(Statement),
}

impl BodyKind {
    pub fn name(&self) -> &'static str {
        match self {
            BodyKind::Expression(expression) => expression.kind.name(),
            BodyKind::If(_) => "if",
            BodyKind::While(_) => "while",
            BodyKind::DoWhile(_) => "do while",
            BodyKind::For(_) => "for",
            BodyKind::ForEach(_) => "foreach",
            BodyKind::Statement(_) => "statement",
        }
    }
}

/// One `if`/`elif` arm
#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Box<Expression>,
    pub body: Vec<Option<Body>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub clauses: Vec<IfClause>,
    pub else_body: Vec<Option<Body>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub condition: Box<Expression>,
    pub body: Vec<Option<Body>>,
}

/// Condition is tested after the body
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhile {
    pub body: Vec<Option<Body>>,
    pub condition: Box<Expression>,
}

/// C-style `for init, cond, step { }`
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub initializer: Option<Box<Expression>>,
    pub condition: Option<Box<Expression>>,
    pub step: Option<Box<Expression>>,
    pub body: Vec<Option<Body>>,
}

/// `for a, b in iterable { }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForEach {
    pub targets: Vec<Option<Declaration>>,
    pub iterator: Box<Expression>,
    pub body: Vec<Option<Body>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Continue { loop_count: usize },
    Break { loop_count: usize },
    Return(Option<Box<Expression>>),
}

// === EXPRESSIONS ===

/// Value-level node
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: Span,
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Identifier(Identifier),
    Unary(UnaryOperation),
    Binary(BinaryOperation),
    Ternary(TernaryOperation),
    Comparison(Comparison),
    Subscript(Subscript),
    Call(Call),
    Declaration(Declaration),
    Function(Function),
    Scope(Scope),
    Constant(ConstValue),
    Tuple(Tuple),
    List(List),
    Dict(Dict),
}

impl ExpressionKind {
    /// Human readable construct name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ExpressionKind::Identifier(_) => "identifier",
            ExpressionKind::Unary(_) => "unary expression",
            ExpressionKind::Binary(_) => "binary expression",
            ExpressionKind::Ternary(_) => "ternary expression",
            ExpressionKind::Comparison(_) => "comparison expression",
            ExpressionKind::Subscript(_) => "subscript",
            ExpressionKind::Call(_) => "call",
            ExpressionKind::Declaration(_) => "declaration",
            ExpressionKind::Function(_) => "function",
            ExpressionKind::Scope(_) => "scope",
            ExpressionKind::Constant(_) => "constant",
            ExpressionKind::Tuple(_) => "tuple",
            ExpressionKind::List(_) => "list",
            ExpressionKind::Dict(_) => "dict",
        }
    }
}

/// Dotted name with an optional generic instantiation, e.g. `std.list!(int)`
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub identifiers: Vec<String>,
    pub generics: Vec<Option<TypeAnnotation>>,
}

impl Identifier {
    pub fn new<S: Into<String>>(identifiers: impl IntoIterator<Item = S>) -> Self {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            generics: Vec::new(),
        }
    }

    pub fn with_generic(mut self, generic: TypeAnnotation) -> Self {
        self.generics.push(Some(generic));
        self
    }

    /// `func!(R(A, B))` spells a function type
    pub fn is_function_type(&self) -> bool {
        self.identifiers.len() == 1 && self.identifiers[0] == "func"
    }
}

/// A type use: identifier plus `ref` count and array dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnnotation {
    pub identifier: Identifier,
    pub refs: usize,
    /// A leading zero dimension means "not an array"
    pub array: Vec<u64>,
}

impl TypeAnnotation {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            refs: 0,
            array: Vec::new(),
        }
    }

    pub fn with_refs(mut self, refs: usize) -> Self {
        self.refs = refs;
        self
    }

    pub fn with_array(mut self, array: Vec<u64>) -> Self {
        self.array = array;
        self
    }

    /// Dimensions that actually make this an array type
    pub fn dimensions(&self) -> &[u64] {
        match self.array.first() {
            Some(0) | None => &[],
            Some(_) => &self.array,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Compound assignment
    IAdd,
    ISub,
    IMul,
    IDiv,
    IMod,
    IPow,

    Increment,
    Decrement,

    // Comparison
    Equal,
    NotEqual,
    Less,
    More,
    LessEqual,
    MoreEqual,

    // Bitwise
    BitAnd,
    BitOr,
    BitNot,
    BitXor,
    BitLshift,
    BitRshift,
    IBitAnd,
    IBitOr,
    IBitXor,
    IBitLshift,
    IBitRshift,

    // Logical
    And,
    Or,
    Not,

    Assign,
}

impl Operator {
    /// Kithare source spelling
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "**",
            Operator::IAdd => "+=",
            Operator::ISub => "-=",
            Operator::IMul => "*=",
            Operator::IDiv => "/=",
            Operator::IMod => "%=",
            Operator::IPow => "**=",
            Operator::Increment => "++",
            Operator::Decrement => "--",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::More => ">",
            Operator::LessEqual => "<=",
            Operator::MoreEqual => ">=",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitNot => "~",
            Operator::BitXor => "^",
            Operator::BitLshift => "<<",
            Operator::BitRshift => ">>",
            Operator::IBitAnd => "&=",
            Operator::IBitOr => "|=",
            Operator::IBitXor => "^=",
            Operator::IBitLshift => "<<=",
            Operator::IBitRshift => ">>=",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::Assign => "=",
        }
    }

    /// C++ spelling, `None` when C++ has no such operator
    pub fn target_symbol(&self) -> Option<&'static str> {
        match self {
            Operator::Pow | Operator::IPow => None,
            Operator::And => Some("&&"),
            Operator::Or => Some("||"),
            Operator::Not => Some("!"),
            other => Some(other.symbol()),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperation {
    pub operator: Operator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    pub operator: Operator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TernaryOperation {
    pub condition: Box<Expression>,
    pub value: Box<Expression>,
    pub otherwise: Box<Expression>,
}

/// Chained comparison `a < b <= c`
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub operators: Vec<Operator>,
    /// Always one more than `operators`
    pub values: Vec<Option<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscript {
    pub expression: Box<Expression>,
    pub arguments: Vec<Option<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub expression: Box<Expression>,
    pub arguments: Vec<Option<Expression>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Variable declaration, also used for members and arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub var_type: Option<TypeAnnotation>,
    pub is_static: bool,
    pub visibility: Visibility,
    pub name: String,
    pub initializer: Option<Box<Expression>>,
    pub span: Span,
}

impl Declaration {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            var_type: None,
            is_static: false,
            visibility: Visibility::Public,
            name: name.into(),
            initializer: None,
            span,
        }
    }

    pub fn with_type(mut self, var_type: TypeAnnotation) -> Self {
        self.var_type = Some(var_type);
        self
    }

    pub fn with_initializer(mut self, initializer: Expression) -> Self {
        self.initializer = Some(Box::new(initializer));
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Function definition or lambda (empty `identifiers`)
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub is_static: bool,
    pub visibility: Visibility,
    pub identifiers: Vec<String>,
    pub generic_params: Vec<String>,
    pub return_type: Option<TypeAnnotation>,
    pub arguments: Vec<Option<Declaration>>,
    pub body: Vec<Option<Body>>,
    pub span: Span,
}

impl Function {
    pub fn new<S: Into<String>>(identifiers: impl IntoIterator<Item = S>, span: Span) -> Self {
        Self {
            is_static: false,
            visibility: Visibility::Public,
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            generic_params: Vec::new(),
            return_type: None,
            arguments: Vec::new(),
            body: Vec::new(),
            span,
        }
    }

    pub fn lambda(span: Span) -> Self {
        Self::new(Vec::<String>::new(), span)
    }

    pub fn is_lambda(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn with_return_type(mut self, return_type: TypeAnnotation) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn with_argument(mut self, argument: Declaration) -> Self {
        self.arguments.push(Some(argument));
        self
    }

    pub fn with_body(mut self, body: Vec<Body>) -> Self {
        self.body = body.into_iter().map(Some).collect();
        self
    }
}

/// Member access on an arbitrary expression: `(expr).a.b`
#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    pub expression: Box<Expression>,
    pub identifiers: Vec<String>,
}

/// Literal value; the variant is the tag and carries the only payload
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Character(char),
    UnsignedInteger(u64),
    Integer(i64),
    Floating(f64),
    Imaginary(f64),
    Complex { real: f64, imaginary: f64 },
    Buffer(Vec<u8>),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tuple {
    pub elements: Vec<Option<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    pub elements: Vec<Option<Expression>>,
}

/// Parallel keys and items
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dict {
    pub keys: Vec<Option<Expression>>,
    pub items: Vec<Option<Expression>>,
}
