//! Core lexer dispatch.

use ninoc_util::Span;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for the source language.
///
/// Scans left-to-right with one-character lookahead (two characters for
/// `==`, `!=`, `=>`, `<=`, `>=`), producing a flat token stream. Whitespace
/// is consumed and discarded; an unrecognized character is reported as a
/// [`LexError::UnknownCharacter`] and aborts scanning — there is no error
/// recovery.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
    /// Set immediately after emitting a `Colon`; consumed by the next call
    /// to `next_token`, which then lexes a `TypeName` instead of an
    /// `Ident`/keyword.
    pub(crate) expect_type_name: bool,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            expect_type_name: false,
            done: false,
        }
    }

    /// Returns the next token in the source stream, or `EndOfInput` at the
    /// end of the buffer.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::EndOfInput));
        }

        if self.expect_type_name {
            self.expect_type_name = false;
            if is_ident_start(self.cursor.current_char()) {
                return Ok(self.lex_type_name());
            }
        }

        match self.cursor.current_char() {
            '(' => Ok(self.single(TokenKind::LParen)),
            ')' => Ok(self.single(TokenKind::RParen)),
            '[' => Ok(self.single(TokenKind::LBracket)),
            ']' => Ok(self.single(TokenKind::RBracket)),
            '{' => Ok(self.single(TokenKind::LBrace)),
            '}' => Ok(self.single(TokenKind::RBrace)),
            ',' => Ok(self.single(TokenKind::Comma)),
            ';' => Ok(self.single(TokenKind::Semicolon)),
            '"' => Ok(self.lex_string()),
            '|' => Ok(self.single(TokenKind::Pipe)),
            '?' => Ok(self.single(TokenKind::Question)),
            '+' => Ok(self.single(TokenKind::Plus)),
            '-' => Ok(self.single(TokenKind::Minus)),
            '*' => Ok(self.single(TokenKind::Star)),
            '/' => Ok(self.single(TokenKind::Slash)),
            '=' => Ok(self.lex_equals()),
            '!' => Ok(self.lex_bang()),
            '<' => Ok(self.lex_less()),
            '>' => Ok(self.lex_greater()),
            ':' => Ok(self.lex_colon()),
            c if is_ident_start(c) => Ok(self.lex_identifier()),
            c if c.is_ascii_digit() => Ok(self.lex_number()),
            c => {
                let span = self.current_span();
                self.cursor.advance();
                Err(LexError::UnknownCharacter(c, span))
            }
        }
    }

    /// Consumes space, tab, carriage return, and newline.
    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\r' | '\n') {
            self.cursor.advance();
        }
    }

    pub(crate) fn single(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.make_token(kind)
    }

    pub(crate) fn make_token(&mut self, kind: TokenKind) -> Token<'a> {
        let text = &self.cursor.source()[self.token_start..self.cursor.position()];
        Token::new(kind, text, self.current_span())
    }

    pub(crate) fn current_span(&self) -> Span {
        Span::new(
            self.token_start as u32,
            self.cursor.position() as u32,
            self.token_start_line,
            self.token_start_column,
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) => {
                if token.kind == TokenKind::EndOfInput {
                    self.done = true;
                }
                Some(Ok(token))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Lexes the full source into an ordered token list, including the
/// trailing `EndOfInput` sentinel. Stops at the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let is_eof = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}
