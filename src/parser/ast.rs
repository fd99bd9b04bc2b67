use crate::lexer::token::{TokenKind, TokenValue};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program(pub Vec<Assignment>);

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub operator: String,
    pub value: TokenValue,
    pub value_kind: TokenKind,
    pub line: usize,
}
