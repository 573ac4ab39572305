//! Lexer for the source language: turns raw source text into an ordered
//! token stream terminated by `EndOfInput`.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::{LexError, Result};
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_empty_input_to_eof() {
        assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn lexes_let_declaration() {
        assert_eq!(
            kinds("let x: i32 = 5;"),
            vec![
                TokenKind::Let,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::TypeName,
                TokenKind::Assign,
                TokenKind::IntLit,
                TokenKind::Semicolon,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn type_name_follows_every_colon() {
        let tokens = tokenize("let f: i32 = (x:i32):i32 => x;").unwrap();
        let mut saw_colon = false;
        for token in &tokens {
            if saw_colon {
                assert_eq!(token.kind, TokenKind::TypeName, "token after ':' must be TypeName");
                saw_colon = false;
            }
            if token.kind == TokenKind::Colon {
                saw_colon = true;
            }
        }
    }

    #[test]
    fn keyword_table_recognizes_reserved_words() {
        assert_eq!(kinds("let fn print mod true false"), vec![
            TokenKind::Let,
            TokenKind::Fn,
            TokenKind::Print,
            TokenKind::Mod,
            TokenKind::BoolLit,
            TokenKind::BoolLit,
            TokenKind::EndOfInput,
        ]);
    }

    #[test]
    fn two_character_operators_take_precedence_over_one_character() {
        assert_eq!(
            kinds("== != => <= >= = ! < >"),
            vec![
                TokenKind::Equal,
                TokenKind::NotEqual,
                TokenKind::Arrow,
                TokenKind::LessEq,
                TokenKind::GreaterEq,
                TokenKind::Assign,
                TokenKind::Bang,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn float_literal_requires_digit_after_dot() {
        assert_eq!(kinds("3.14"), vec![TokenKind::FloatLit, TokenKind::EndOfInput]);
        assert_eq!(kinds("42"), vec![TokenKind::IntLit, TokenKind::EndOfInput]);
    }

    #[test]
    fn string_literal_spans_quotes() {
        let tokens = tokenize(r#""hello world""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::StringLit);
        assert_eq!(tokens[0].text, r#""hello world""#);
    }

    #[test]
    fn unknown_character_is_fatal() {
        let err = tokenize("let x = 5 @ 3;").unwrap_err();
        assert!(matches!(err, LexError::UnknownCharacter('@', _)));
    }

    #[test]
    fn pattern_match_punctuation() {
        assert_eq!(
            kinds("n ? { 1 => 10, true => 0 }"),
            vec![
                TokenKind::Ident,
                TokenKind::Question,
                TokenKind::LBrace,
                TokenKind::IntLit,
                TokenKind::Arrow,
                TokenKind::IntLit,
                TokenKind::Comma,
                TokenKind::BoolLit,
                TokenKind::Arrow,
                TokenKind::IntLit,
                TokenKind::RBrace,
                TokenKind::EndOfInput,
            ]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Concatenating every token's text reproduces the non-whitespace
        /// source, up to the position of any lexical error.
        #[test]
        fn token_text_reconstructs_non_whitespace_source(
            source in "(let|print|mod|fn|[a-z][a-z0-9_]{0,6}|[0-9]{1,4}|[ \t]){1,20}"
        ) {
            if let Ok(tokens) = tokenize(&source) {
                let reconstructed: String = tokens.iter().map(|t| t.text).collect();
                let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
                prop_assert_eq!(reconstructed, expected);
            }
        }

        #[test]
        fn final_token_is_always_eof(source in "[a-z0-9_ \t:;(){}+\\-*/,=!<>]{0,40}") {
            if let Ok(tokens) = tokenize(&source) {
                prop_assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
            }
        }
    }
}
