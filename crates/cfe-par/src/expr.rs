//! Expression grammar: a fixed-precedence cascade rather than a
//! table-driven climb, since the grammar this front end accepts has only
//! four precedence levels and assignment.
//!
//! ```text
//! expression     -> assignment
//! assignment     -> equality ("=" assignment)?        (right-associative)
//! equality       -> relational (("==" | "!=") relational)*
//! relational     -> additive (("<" | ">" | "<=" | ">=") additive)*
//! additive       -> multiplicative (("+" | "-") multiplicative)*
//! multiplicative -> primary (("*" | "/") primary)*
//! primary        -> NUMERIC_CONSTANT | IDENTIFIER | "(" expression ")"
//! ```

use cfe_core::TokenClass;

use crate::ast::{NodeKind, SyntaxNode};
use crate::error::ParseError;
use crate::Parser;

pub(crate) fn expression(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    assignment(parser)
}

fn assignment(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let left = equality(parser)?;
    if parser.peek().is(TokenClass::Operator, "=") {
        let eq_tok = parser.advance();
        let right = assignment(parser)?;
        return Ok(SyntaxNode::new(
            NodeKind::AssignmentExpression,
            "=",
            eq_tok.line as u32,
            vec![left, right],
        ));
    }
    Ok(left)
}

fn equality(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    binary_left_assoc(parser, &["==", "!="], relational)
}

fn relational(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    binary_left_assoc(parser, &["<", ">", "<=", ">="], additive)
}

fn additive(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    binary_left_assoc(parser, &["+", "-"], multiplicative)
}

fn multiplicative(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    binary_left_assoc(parser, &["*", "/"], primary)
}

/// Shared left-associative binary loop: parses one `operand` through
/// `next`, then keeps folding in `operand (op operand)*` for as long as the
/// lookahead operator is in `operators`.
fn binary_left_assoc(
    parser: &mut Parser,
    operators: &[&str],
    next: fn(&mut Parser) -> Result<SyntaxNode, ParseError>,
) -> Result<SyntaxNode, ParseError> {
    let mut left = next(parser)?;
    while parser.peek().is_one_of(TokenClass::Operator, operators) {
        let op_tok = parser.advance();
        let right = next(parser)?;
        let line = left.line;
        left = SyntaxNode::new(NodeKind::BinaryExpression, op_tok.value, line, vec![left, right]);
    }
    Ok(left)
}

fn primary(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let peeked = parser.peek();
    if peeked.is_class(TokenClass::NumericConstant) {
        let tok = parser.advance();
        return Ok(SyntaxNode::leaf(NodeKind::Constant, tok.value, tok.line as u32));
    }
    if peeked.is_class(TokenClass::Identifier) {
        let tok = parser.advance();
        return Ok(SyntaxNode::leaf(NodeKind::Identifier, tok.value, tok.line as u32));
    }
    if peeked.is(TokenClass::SpecialCharacter, "(") {
        parser.advance();
        let inner = expression(parser)?;
        parser.expect(TokenClass::SpecialCharacter, ")")?;
        return Ok(inner);
    }
    Err(ParseError::unexpected(&peeked, "an expression"))
}
