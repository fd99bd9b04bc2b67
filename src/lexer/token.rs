use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Integer,
    Float,
    Literal,
    Operator,
    Punctuator,
}

impl TokenKind {
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Float | TokenKind::Literal
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Literal => "LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuator => "PUNCTUATOR",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl TokenValue {
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(s) => write!(f, "{s}"),
            TokenValue::Integer(i) => write!(f, "{i}"),
            // `{:?}` keeps the fractional part, so 5.0 prints as `5.0`
            TokenValue::Float(x) => write!(f, "{x:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, line: usize) -> Self {
        Self { kind, value, line }
    }

    pub fn is_punctuator(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punctuator && self.value.text() == Some(punct)
    }
}
