//! Abstract syntax tree produced by the parser.
//!
//! Every node owns its children outright (no shared subtrees, no raw
//! pointers) and carries a [`Span`] used only for diagnostics.

use ninoc_util::Span;

/// A top-level program item.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Declaration(Declaration),
    PrintStatement(PrintStatement),
    ExpressionStatement(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub type_name: String,
    pub initializer: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStatement {
    pub expression: Box<Expression>,
    pub span: Span,
}

/// A function-literal parameter: `name: type_name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

/// One `pattern => value` arm of a pattern match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub pattern: Expression,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    IntegerLiteral {
        type_name: String,
        text: String,
        span: Span,
    },
    FloatLiteral {
        type_name: String,
        text: String,
        span: Span,
    },
    StringLiteral {
        text: String,
        span: Span,
    },
    Identifier {
        text: String,
        span: Span,
    },
    /// `op` is the operator's literal source text (`"+"`, `"-"`, `"*"`,
    /// `"/"`). It is not validated against that set here; the code
    /// generator is the layer that rejects anything else, since it is the
    /// layer the taxonomy assigns `UnknownOperator` to.
    BinaryOp {
        op: String,
        left: Box<Expression>,
        right: Box<Expression>,
        span: Span,
    },
    FunctionLiteral {
        parameters: Vec<Parameter>,
        return_type: String,
        body: Box<Expression>,
        span: Span,
    },
    FunctionCall {
        callee_name: String,
        arguments: Vec<Expression>,
        span: Span,
    },
    PatternMatch {
        scrutinee: Box<Expression>,
        arms: Vec<MatchArm>,
        span: Span,
    },
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::IntegerLiteral { span, .. }
            | Expression::FloatLiteral { span, .. }
            | Expression::StringLiteral { span, .. }
            | Expression::Identifier { span, .. }
            | Expression::BinaryOp { span, .. }
            | Expression::FunctionLiteral { span, .. }
            | Expression::FunctionCall { span, .. }
            | Expression::PatternMatch { span, .. } => *span,
        }
    }

    /// A short tag naming the variant, used by `CodegenError::UnknownExpressionKind`.
    pub fn kind_tag(&self) -> &'static str {
        match self {
            Expression::IntegerLiteral { .. } => "IntegerLiteral",
            Expression::FloatLiteral { .. } => "FloatLiteral",
            Expression::StringLiteral { .. } => "StringLiteral",
            Expression::Identifier { .. } => "Identifier",
            Expression::BinaryOp { .. } => "BinaryOp",
            Expression::FunctionLiteral { .. } => "FunctionLiteral",
            Expression::FunctionCall { .. } => "FunctionCall",
            Expression::PatternMatch { .. } => "PatternMatch",
        }
    }
}
