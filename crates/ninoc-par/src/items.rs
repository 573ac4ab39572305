//! Top-level item parsing: `program := item*`.

use ninoc_lex::TokenKind;

use crate::ast::{Declaration, Item, PrintStatement};
use crate::error::Result;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Parses the whole token stream into an ordered list of items.
    pub fn parse(&mut self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        while self.cursor.current().kind != TokenKind::EndOfInput {
            items.push(self.parse_item()?);
        }
        Ok(items)
    }

    fn parse_item(&mut self) -> Result<Item> {
        match self.cursor.current().kind {
            TokenKind::Let => self.parse_declaration(),
            TokenKind::Print => self.parse_print(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_declaration(&mut self) -> Result<Item> {
        let let_tok = self.cursor.expect(TokenKind::Let)?;
        let name = self.cursor.expect(TokenKind::Ident)?.text.to_string();
        self.cursor.expect(TokenKind::Colon)?;
        let type_name = self.cursor.expect(TokenKind::TypeName)?.text.to_string();
        self.cursor.expect(TokenKind::Assign)?;
        let initializer = self.parse_expression()?;
        let end = self.cursor.expect(TokenKind::Semicolon)?;
        Ok(Item::Declaration(Declaration {
            name,
            type_name,
            initializer: Box::new(initializer),
            span: let_tok.span.to(end.span),
        }))
    }

    fn parse_print(&mut self) -> Result<Item> {
        let print_tok = self.cursor.expect(TokenKind::Print)?;
        self.cursor.expect(TokenKind::LParen)?;
        let expression = self.parse_expression()?;
        self.cursor.expect(TokenKind::RParen)?;
        let end = self.cursor.expect(TokenKind::Semicolon)?;
        Ok(Item::PrintStatement(PrintStatement {
            expression: Box::new(expression),
            span: print_tok.span.to(end.span),
        }))
    }

    fn parse_expression_statement(&mut self) -> Result<Item> {
        let expression = self.parse_expression()?;
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(Item::ExpressionStatement(expression))
    }
}
