//! String literal scanning.
//!
//! Escape sequences are not supported; a string candidate is a `"`
//! followed by any run of non-`"` characters followed by a closing `"`.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_string(&mut self) -> Token<'a> {
        debug_assert_eq!(self.cursor.current_char(), '"');
        self.cursor.advance(); // opening quote
        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }
        if self.cursor.current_char() == '"' {
            self.cursor.advance(); // closing quote
        }
        self.make_token(TokenKind::StringLit)
    }
}
