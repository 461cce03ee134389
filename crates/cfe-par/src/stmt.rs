//! Statement productions.

use cfe_core::TokenClass;

use crate::ast::{NodeKind, SyntaxNode};
use crate::error::ParseError;
use crate::expr::expression;
use crate::items::{is_declaration_keyword, variable_declaration};
use crate::Parser;

pub(crate) fn statement(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let peeked = parser.peek();
    if peeked.is(TokenClass::Keyword, "if") {
        return if_statement(parser);
    }
    if peeked.is(TokenClass::Keyword, "for") {
        return for_statement(parser);
    }
    if peeked.is(TokenClass::Keyword, "return") {
        return return_statement(parser);
    }
    if peeked.is(TokenClass::SpecialCharacter, "{") {
        return block_statement(parser);
    }
    if peeked.is(TokenClass::SpecialCharacter, ";") {
        let tok = parser.advance();
        return Ok(SyntaxNode::leaf(NodeKind::EmptyStatement, "", tok.line as u32));
    }
    if peeked.is_class(TokenClass::Keyword) && is_declaration_keyword(&peeked.value) {
        return variable_declaration(parser);
    }
    expression_statement(parser)
}

pub(crate) fn block_statement(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let open = parser.expect(TokenClass::SpecialCharacter, "{")?;
    let mut children = Vec::new();
    while !parser.peek().is(TokenClass::SpecialCharacter, "}") {
        if parser.peek().is_eof() {
            return Err(ParseError::unexpected(&parser.peek(), "'}'"));
        }
        children.push(statement(parser)?);
    }
    parser.advance();
    Ok(SyntaxNode::new(NodeKind::BlockStatement, "", open.line as u32, children))
}

fn if_statement(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let kw = parser.expect(TokenClass::Keyword, "if")?;
    parser.expect(TokenClass::SpecialCharacter, "(")?;
    let condition = expression(parser)?;
    parser.expect(TokenClass::SpecialCharacter, ")")?;
    let then_branch = statement(parser)?;

    let mut children = vec![condition, then_branch];
    if parser.peek().is(TokenClass::Keyword, "else") {
        parser.advance();
        children.push(statement(parser)?);
    }
    Ok(SyntaxNode::new(NodeKind::IfStatement, "", kw.line as u32, children))
}

fn for_statement(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let kw = parser.expect(TokenClass::Keyword, "for")?;
    parser.expect(TokenClass::SpecialCharacter, "(")?;
    let init = for_init(parser)?;
    let condition = for_condition(parser)?;
    let increment = for_increment(parser)?;
    parser.expect(TokenClass::SpecialCharacter, ")")?;
    let body = statement(parser)?;
    Ok(SyntaxNode::new(
        NodeKind::ForStatement,
        "",
        kw.line as u32,
        vec![init, condition, increment, body],
    ))
}

/// `";" | variable_declaration | expression_statement` — the declaration
/// and expression-statement forms already consume their own trailing `;`.
fn for_init(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let peeked = parser.peek();
    if peeked.is(TokenClass::SpecialCharacter, ";") {
        let tok = parser.advance();
        return Ok(SyntaxNode::leaf(NodeKind::Empty, "initializer", tok.line as u32));
    }
    if peeked.is_class(TokenClass::Keyword) && is_declaration_keyword(&peeked.value) {
        return variable_declaration(parser);
    }
    expression_statement(parser)
}

/// `";" | expression ";"`
fn for_condition(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let peeked = parser.peek();
    if peeked.is(TokenClass::SpecialCharacter, ";") {
        let tok = parser.advance();
        return Ok(SyntaxNode::leaf(NodeKind::Empty, "condition", tok.line as u32));
    }
    let node = expression(parser)?;
    parser.expect(TokenClass::SpecialCharacter, ";")?;
    Ok(node)
}

/// `ε | expression` — followed directly by the closing `)`, no `;`.
fn for_increment(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let peeked = parser.peek();
    if peeked.is(TokenClass::SpecialCharacter, ")") {
        return Ok(SyntaxNode::leaf(NodeKind::Empty, "increment", peeked.line.max(0) as u32));
    }
    expression(parser)
}

fn return_statement(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let kw = parser.expect(TokenClass::Keyword, "return")?;
    let mut children = Vec::new();
    if !parser.peek().is(TokenClass::SpecialCharacter, ";") {
        children.push(expression(parser)?);
    }
    parser.expect(TokenClass::SpecialCharacter, ";")?;
    Ok(SyntaxNode::new(NodeKind::ReturnStatement, "", kw.line as u32, children))
}

fn expression_statement(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let expr = expression(parser)?;
    let line = expr.line;
    parser.expect(TokenClass::SpecialCharacter, ";")?;
    Ok(SyntaxNode::new(NodeKind::ExpressionStatement, "", line, vec![expr]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfe_core::Token;

    fn tok(class: TokenClass, value: &str, line: u32) -> Token {
        Token::new(class, value, line)
    }

    #[test]
    fn empty_statement_is_a_bare_semicolon() {
        let mut parser = Parser::new(vec![tok(TokenClass::SpecialCharacter, ";", 1)]);
        let node = statement(&mut parser).unwrap();
        assert_eq!(node.kind, NodeKind::EmptyStatement);
    }

    #[test]
    fn for_loop_with_all_three_clauses() {
        // for(i=0;i<10;i=i+1) ;
        let mut parser = Parser::new(vec![
            tok(TokenClass::Keyword, "for", 1),
            tok(TokenClass::SpecialCharacter, "(", 1),
            tok(TokenClass::Identifier, "i", 1),
            tok(TokenClass::Operator, "=", 1),
            tok(TokenClass::NumericConstant, "0", 1),
            tok(TokenClass::SpecialCharacter, ";", 1),
            tok(TokenClass::Identifier, "i", 1),
            tok(TokenClass::Operator, "<", 1),
            tok(TokenClass::NumericConstant, "10", 1),
            tok(TokenClass::SpecialCharacter, ";", 1),
            tok(TokenClass::Identifier, "i", 1),
            tok(TokenClass::Operator, "=", 1),
            tok(TokenClass::Identifier, "i", 1),
            tok(TokenClass::Operator, "+", 1),
            tok(TokenClass::NumericConstant, "1", 1),
            tok(TokenClass::SpecialCharacter, ")", 1),
            tok(TokenClass::SpecialCharacter, ";", 1),
        ]);
        let node = for_statement(&mut parser).unwrap();
        assert_eq!(node.kind, NodeKind::ForStatement);
        assert_eq!(node.children.len(), 4);
        assert_eq!(node.children[0].kind, NodeKind::ExpressionStatement);
        assert_eq!(node.children[1].kind, NodeKind::BinaryExpression);
        assert_eq!(node.children[2].kind, NodeKind::AssignmentExpression);
        assert_eq!(node.children[3].kind, NodeKind::EmptyStatement);
    }

    #[test]
    fn for_loop_with_empty_clauses() {
        // for(;;) ;
        let mut parser = Parser::new(vec![
            tok(TokenClass::Keyword, "for", 3),
            tok(TokenClass::SpecialCharacter, "(", 3),
            tok(TokenClass::SpecialCharacter, ";", 3),
            tok(TokenClass::SpecialCharacter, ";", 3),
            tok(TokenClass::SpecialCharacter, ")", 3),
            tok(TokenClass::SpecialCharacter, ";", 3),
        ]);
        let node = for_statement(&mut parser).unwrap();
        assert_eq!(node.children[0].kind, NodeKind::Empty);
        assert_eq!(node.children[0].value, "initializer");
        assert_eq!(node.children[1].kind, NodeKind::Empty);
        assert_eq!(node.children[1].value, "condition");
        assert_eq!(node.children[2].kind, NodeKind::Empty);
        assert_eq!(node.children[2].value, "increment");
    }

    #[test]
    fn if_else_has_three_children() {
        // if(1) return 1; else return 0;
        let mut parser = Parser::new(vec![
            tok(TokenClass::Keyword, "if", 1),
            tok(TokenClass::SpecialCharacter, "(", 1),
            tok(TokenClass::NumericConstant, "1", 1),
            tok(TokenClass::SpecialCharacter, ")", 1),
            tok(TokenClass::Keyword, "return", 1),
            tok(TokenClass::NumericConstant, "1", 1),
            tok(TokenClass::SpecialCharacter, ";", 1),
            tok(TokenClass::Keyword, "else", 1),
            tok(TokenClass::Keyword, "return", 1),
            tok(TokenClass::NumericConstant, "0", 1),
            tok(TokenClass::SpecialCharacter, ";", 1),
        ]);
        let node = if_statement(&mut parser).unwrap();
        assert_eq!(node.children.len(), 3);
    }

    #[test]
    fn unterminated_block_is_a_syntax_error_at_eof() {
        let mut parser = Parser::new(vec![tok(TokenClass::SpecialCharacter, "{", 1)]);
        let err = block_statement(&mut parser).unwrap_err();
        assert!(matches!(err, ParseError::AtEof { .. }));
    }
}
