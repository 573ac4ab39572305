//! Identifier, keyword, and type-name scanning.

use super::core::{is_ident_continue, is_ident_start};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans a maximal `[a-z][a-z0-9_]*` run and classifies it against the
    /// keyword table, falling back to `Ident`.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        debug_assert!(is_ident_start(self.cursor.current_char()));
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = &self.cursor.source()[self.token_start..self.cursor.position()];
        let kind = match text {
            "let" => TokenKind::Let,
            "fn" => TokenKind::Fn,
            "print" => TokenKind::Print,
            "mod" => TokenKind::Mod,
            "true" | "false" => TokenKind::BoolLit,
            _ => TokenKind::Ident,
        };
        self.make_token(kind)
    }

    /// Scans the same `[a-z][a-z0-9_]*` grammar as [`lex_identifier`] but
    /// always tags the result as `TypeName`, skipping the keyword table —
    /// this is the lexer-level context sensitivity that follows `:`.
    pub(crate) fn lex_type_name(&mut self) -> Token<'a> {
        debug_assert!(is_ident_start(self.cursor.current_char()));
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.make_token(TokenKind::TypeName)
    }
}
