use crate::{
    ast::{
        ast::Stmt,
        expressions::SymbolExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token; anything without a statement handler is
/// an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.lookups().get_stmt(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.next_token();
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // The semicolon is optional so `{ x }` works at the end of a block
    skip_optional_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name_token = parser.current_token().clone();
    let name = SymbolExpr {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

/// Parses `{ ... }` starting on the `{`, leaving the parser on the closing `}`
/// (or on EOF when the block is unterminated).
///
/// Statement errors inside the block are recorded and the block carries on.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    parser.next_token();

    let mut body = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) && !parser.current_is(TokenKind::EOF) {
        if let Some(stmt) = parser.parse_stmt_or_record() {
            body.push(stmt);
        }
        parser.next_token();
    }

    BlockStmt { token, body }
}
