use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{BooleanExpr, IfExpr, InfixExpr, NumberExpr, PrefixExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Precedence climbing over the current token.
///
/// On return the current token is the last token of the parsed expression.
/// Every nested expression goes through here, so this is where the nesting
/// depth is bounded.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = climb(parser, bp);
    parser.leave_nesting();

    result
}

fn climb(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    trace!(token = %parser.current_token().literal, ?bp, depth = parser.nesting_depth(), "parse_expr");
    let lookups = parser.lookups();

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = lookups.get_nud(token_kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, fold it into the lhs
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_precedence() {
        let Some(led) = lookups.get_led(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.next_token();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Symbol(SymbolExpr {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Number(NumberExpr { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.literal.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanExpr {
        value: token.is(TokenKind::True),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_precedence();
    parser.next_token();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// `( <expr> )` yields the inner expression; the parentheses leave no node.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.next_token();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.next_token();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.next_token();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}
