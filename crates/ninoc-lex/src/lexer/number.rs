//! Numeric literal scanning.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans a maximal run of digits with at most one embedded `.`. A `.`
    /// present anywhere in the run makes the token a `FloatLit`; otherwise
    /// it is an `IntLit`.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        debug_assert!(self.cursor.current_char().is_ascii_digit());
        let mut saw_dot = false;
        while self.cursor.current_char().is_ascii_digit()
            || (self.cursor.current_char() == '.' && !saw_dot && self.cursor.peek_char(1).is_ascii_digit())
        {
            if self.cursor.current_char() == '.' {
                saw_dot = true;
            }
            self.cursor.advance();
        }
        let kind = if saw_dot { TokenKind::FloatLit } else { TokenKind::IntLit };
        self.make_token(kind)
    }
}
