//! Expression parsing: `expression := equality` down through `primary`.
//!
//! `term` and `factor` are left-associative: each iteration of their loops
//! wraps the accumulator as the left child of a new `BinaryOp`.

use ninoc_lex::TokenKind;

use crate::ast::{Expression, MatchArm, Parameter};
use crate::error::{ParseError, Result};
use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_equality()
    }

    /// Reserved for future comparison operators; passes through to
    /// `comparison` in this grammar.
    fn parse_equality(&mut self) -> Result<Expression> {
        self.parse_comparison()
    }

    /// Reserved for future relational operators; passes through to `term`
    /// in this grammar.
    fn parse_comparison(&mut self) -> Result<Expression> {
        self.parse_term()
    }

    fn parse_term(&mut self) -> Result<Expression> {
        let mut left = self.parse_factor()?;
        while matches!(self.cursor.current().kind, TokenKind::Plus | TokenKind::Minus) {
            let op_tok = self.cursor.advance();
            let right = self.parse_factor()?;
            let span = left.span().to(right.span());
            left = Expression::BinaryOp {
                op: op_tok.text.to_string(),
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression> {
        let mut left = self.parse_unary()?;
        while matches!(self.cursor.current().kind, TokenKind::Star | TokenKind::Slash) {
            let op_tok = self.cursor.advance();
            let right = self.parse_unary()?;
            let span = left.span().to(right.span());
            left = Expression::BinaryOp {
                op: op_tok.text.to_string(),
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    /// No prefix unary operators are defined in this grammar; `unary`
    /// passes straight through to `primary`.
    fn parse_unary(&mut self) -> Result<Expression> {
        self.parse_primary()
    }

    /// `primary := primary-base ('?' pattern-match)?`
    fn parse_primary(&mut self) -> Result<Expression> {
        let base = self.parse_primary_base()?;
        if self.cursor.current().kind == TokenKind::Question {
            self.cursor.advance();
            self.parse_pattern_match(base)
        } else {
            Ok(base)
        }
    }

    fn parse_primary_base(&mut self) -> Result<Expression> {
        match self.cursor.current().kind {
            TokenKind::Ident => {
                if self.cursor.peek(1) == TokenKind::LParen {
                    self.parse_function_call()
                } else {
                    let tok = self.cursor.advance();
                    Ok(Expression::Identifier { text: tok.text.to_string(), span: tok.span })
                }
            }
            TokenKind::IntLit => {
                let tok = self.cursor.advance();
                Ok(Expression::IntegerLiteral {
                    type_name: "i32".to_string(),
                    text: tok.text.to_string(),
                    span: tok.span,
                })
            }
            // `true`/`false` lower as the `i32` literals `1`/`0`, the way a
            // match's conventional catch-all arm (`true => …`) needs to
            // compare equal against any scrutinee value (spec §4.3).
            TokenKind::BoolLit => {
                let tok = self.cursor.advance();
                let text = if tok.text == "true" { "1" } else { "0" };
                Ok(Expression::IntegerLiteral {
                    type_name: "i32".to_string(),
                    text: text.to_string(),
                    span: tok.span,
                })
            }
            TokenKind::LParen if self.looks_like_function_literal() => self.parse_function_literal(),
            kind => {
                let span = self.cursor.current().span;
                Err(ParseError::UnexpectedPrimary { kind, span })
            }
        }
    }

    /// Disambiguates `(` as a function literal (`(Ident, Colon, TypeName,
    /// …)`, or the empty-parameter-list `()`) from a bare parenthesized
    /// expression, which this grammar does not implement — anything else
    /// beginning with `(` is rejected with `UnexpectedPrimary` rather than
    /// silently producing an empty node.
    fn looks_like_function_literal(&self) -> bool {
        self.cursor.peek(1) == TokenKind::RParen
            || (self.cursor.peek(1) == TokenKind::Ident
                && self.cursor.peek(2) == TokenKind::Colon
                && self.cursor.peek(3) == TokenKind::TypeName)
    }

    fn parse_function_call(&mut self) -> Result<Expression> {
        let callee_tok = self.cursor.expect(TokenKind::Ident)?;
        self.cursor.expect(TokenKind::LParen)?;
        let mut arguments = Vec::new();
        if self.cursor.current().kind != TokenKind::RParen {
            loop {
                arguments.push(self.parse_expression()?);
                if self.cursor.current().kind == TokenKind::Comma {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }
        let end = self.cursor.expect(TokenKind::RParen)?;
        Ok(Expression::FunctionCall {
            callee_name: callee_tok.text.to_string(),
            arguments,
            span: callee_tok.span.to(end.span),
        })
    }

    fn parse_function_literal(&mut self) -> Result<Expression> {
        let start = self.cursor.expect(TokenKind::LParen)?;
        let mut parameters = Vec::new();
        if self.cursor.current().kind != TokenKind::RParen {
            loop {
                let name_tok = self.cursor.expect(TokenKind::Ident)?;
                self.cursor.expect(TokenKind::Colon)?;
                let type_tok = self.cursor.expect(TokenKind::TypeName)?;
                parameters.push(Parameter {
                    name: name_tok.text.to_string(),
                    type_name: type_tok.text.to_string(),
                });
                if self.cursor.current().kind == TokenKind::Comma {
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        self.cursor.expect(TokenKind::Colon)?;
        let return_type = self.cursor.expect(TokenKind::TypeName)?.text.to_string();
        self.cursor.expect(TokenKind::Arrow)?;
        let body = self.parse_expression()?;
        let span = start.span.to(body.span());
        Ok(Expression::FunctionLiteral { parameters, return_type, body: Box::new(body), span })
    }

    /// `pattern-match := '{' arm (',' arm)* '}'`, entered after the `?`
    /// token has already been consumed by `parse_primary`.
    fn parse_pattern_match(&mut self, scrutinee: Expression) -> Result<Expression> {
        let start = self.cursor.expect(TokenKind::LBrace)?;
        let mut arms = Vec::new();
        loop {
            let pattern = self.parse_expression()?;
            self.cursor.expect(TokenKind::Arrow)?;
            let value = self.parse_expression()?;
            arms.push(MatchArm { pattern, value });
            if self.cursor.current().kind == TokenKind::Comma {
                self.cursor.advance();
                // A trailing comma before the closing brace is accepted,
                // not required (spec §4.2).
                if self.cursor.current().kind == TokenKind::RBrace {
                    break;
                }
            } else {
                break;
            }
        }
        let end = self.cursor.expect(TokenKind::RBrace)?;
        let span = scrutinee.span().to(start.span).to(end.span);
        Ok(Expression::PatternMatch { scrutinee: Box::new(scrutinee), arms, span })
    }
}
