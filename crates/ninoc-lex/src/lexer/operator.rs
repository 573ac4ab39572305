//! Operators and punctuation that require a second character of lookahead.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_equals(&mut self) -> Token<'a> {
        self.cursor.advance();
        match self.cursor.current_char() {
            '=' => {
                self.cursor.advance();
                self.make_token(TokenKind::Equal)
            }
            '>' => {
                self.cursor.advance();
                self.make_token(TokenKind::Arrow)
            }
            _ => self.make_token(TokenKind::Assign),
        }
    }

    pub(crate) fn lex_bang(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            self.make_token(TokenKind::NotEqual)
        } else {
            self.make_token(TokenKind::Bang)
        }
    }

    pub(crate) fn lex_less(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            self.make_token(TokenKind::LessEq)
        } else {
            self.make_token(TokenKind::Less)
        }
    }

    pub(crate) fn lex_greater(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            self.make_token(TokenKind::GreaterEq)
        } else {
            self.make_token(TokenKind::Greater)
        }
    }

    /// Emits `Colon` and arms the type-name context for the next token.
    pub(crate) fn lex_colon(&mut self) -> Token<'a> {
        self.cursor.advance();
        self.expect_type_name = true;
        self.make_token(TokenKind::Colon)
    }
}
