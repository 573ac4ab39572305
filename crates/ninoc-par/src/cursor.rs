//! Token-level cursor the parser advances through.

use ninoc_lex::{Token, TokenKind};

use crate::error::ParseError;

pub(crate) struct Cursor<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: Vec<Token<'a>>) -> Self {
        assert!(!tokens.is_empty(), "token stream must contain at least EndOfInput");
        Cursor { tokens, position: 0 }
    }

    /// The token the cursor currently sits on, without consuming it.
    pub(crate) fn current(&self) -> Token<'a> {
        self.tokens[self.position]
    }

    /// The kind of the token `offset` positions ahead, or `EndOfInput` if
    /// that runs past the end of the stream.
    pub(crate) fn peek(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.position + offset)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::EndOfInput)
    }

    /// Unconditionally consumes the current token and returns it.
    pub(crate) fn advance(&mut self) -> Token<'a> {
        let token = self.current();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Consumes the current token if it matches `kind`, returning it;
    /// otherwise fails without moving the cursor.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError> {
        let token = self.current();
        if token.kind == kind {
            self.advance();
            Ok(token)
        } else {
            Err(ParseError::ExpectedToken { expected: kind, got: token.kind, span: token.span })
        }
    }
}
