//! Recursive-descent parser for the source language: turns a token stream
//! into an ordered list of top-level [`ast::Item`]s.

pub mod ast;
mod cursor;
mod error;
mod expr;
mod items;
mod parser;

pub use error::{ParseError, Result};
pub use parser::Parser;

use ninoc_lex::LexError;

/// Lexes and parses `source` in one call, the entry point the driver uses.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub fn parse_source(source: &str) -> std::result::Result<Vec<ast::Item>, FrontendError> {
    let tokens = ninoc_lex::tokenize(source)?;
    let mut parser = Parser::new(tokens);
    Ok(parser.parse()?)
}

#[cfg(test)]
mod tests {
    use super::ast::*;
    use super::*;

    fn parse(source: &str) -> Vec<Item> {
        parse_source(source).unwrap()
    }

    #[test]
    fn parses_integer_declaration() {
        let items = parse("let x: i32 = 5;");
        assert_eq!(items.len(), 1);
        match &items[0] {
            Item::Declaration(d) => {
                assert_eq!(d.name, "x");
                assert_eq!(d.type_name, "i32");
                assert!(matches!(*d.initializer, Expression::IntegerLiteral { .. }));
            }
            other => panic!("expected Declaration, got {other:?}"),
        }
    }

    #[test]
    fn parses_print_statement() {
        let items = parse("print(x);");
        assert_eq!(items.len(), 1);
        assert!(matches!(&items[0], Item::PrintStatement(_)));
    }

    #[test]
    fn term_is_left_associative() {
        let items = parse("a - b - c;");
        let Item::ExpressionStatement(expr) = &items[0] else { panic!("expected expr stmt") };
        match expr {
            Expression::BinaryOp { op, left, right, .. } => {
                assert_eq!(op, "-");
                assert!(matches!(**right, Expression::Identifier { ref text, .. } if text == "c"));
                match &**left {
                    Expression::BinaryOp { op, left, right, .. } => {
                        assert_eq!(op, "-");
                        assert!(matches!(**left, Expression::Identifier { ref text, .. } if text == "a"));
                        assert!(matches!(**right, Expression::Identifier { ref text, .. } if text == "b"));
                    }
                    other => panic!("expected nested BinaryOp, got {other:?}"),
                }
            }
            other => panic!("expected BinaryOp, got {other:?}"),
        }
    }

    #[test]
    fn factor_binds_tighter_than_term() {
        // a + b * c must parse as a + (b * c), not (a + b) * c.
        let items = parse("a + b * c;");
        let Item::ExpressionStatement(Expression::BinaryOp { op, left, right, .. }) = &items[0] else {
            panic!("expected top-level BinaryOp")
        };
        assert_eq!(op, "+");
        assert!(matches!(**left, Expression::Identifier { ref text, .. } if text == "a"));
        assert!(matches!(**right, Expression::BinaryOp { .. }));
    }

    #[test]
    fn function_literal_parameter_count_matches_source() {
        let items = parse("let add: i32 = (x:i32, y:i32):i32 => x + y;");
        let Item::Declaration(d) = &items[0] else { panic!("expected declaration") };
        match &*d.initializer {
            Expression::FunctionLiteral { parameters, return_type, .. } => {
                assert_eq!(parameters.len(), 2);
                assert_eq!(parameters[0].name, "x");
                assert_eq!(parameters[1].name, "y");
                assert_eq!(return_type, "i32");
            }
            other => panic!("expected FunctionLiteral, got {other:?}"),
        }
    }

    #[test]
    fn function_call_parses_arguments() {
        let items = parse("add(2, 3);");
        let Item::ExpressionStatement(Expression::FunctionCall { callee_name, arguments, .. }) = &items[0]
        else {
            panic!("expected FunctionCall")
        };
        assert_eq!(callee_name, "add");
        assert_eq!(arguments.len(), 2);
    }

    #[test]
    fn pattern_match_requires_at_least_one_arm() {
        let items = parse("n ? { 1 => 10, true => 0 };");
        let Item::ExpressionStatement(Expression::PatternMatch { scrutinee, arms, .. }) = &items[0] else {
            panic!("expected PatternMatch")
        };
        assert!(matches!(**scrutinee, Expression::Identifier { ref text, .. } if text == "n"));
        assert_eq!(arms.len(), 2);
    }

    #[test]
    fn parenthesized_non_function_primary_is_rejected() {
        let err = parse_source("(1 + 2);").unwrap_err();
        assert!(matches!(
            err,
            FrontendError::Parse(ParseError::UnexpectedPrimary { .. })
        ));
    }

    #[test]
    fn missing_colon_in_declaration_reports_expected_colon() {
        let err = parse_source("let x i32 = 5;").unwrap_err();
        match err {
            FrontendError::Parse(ParseError::ExpectedToken { expected, .. }) => {
                assert_eq!(expected, ninoc_lex::TokenKind::Colon);
            }
            other => panic!("expected ExpectedToken(Colon), got {other:?}"),
        }
    }

    #[test]
    fn ast_nodes_form_a_finite_tree() {
        // A deeply nested but finite expression must still parse; this is
        // a smoke check that recursion terminates rather than a specific
        // shape assertion.
        let items = parse("let x: i32 = 1 + 2 + 3 + 4 + 5;");
        assert_eq!(items.len(), 1);
    }
}
