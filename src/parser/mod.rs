pub mod ast;


use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::lexer::token::{Token, TokenKind, TokenValue};
use ast::*;
use multipeek::{multipeek, MultiPeek};
use thiserror::Error;
use tracing::debug;

// <program>              ::= <statement>*
// <statement>            ::= <assignment-statement>
// <assignment-statement> ::= IDENTIFIER OPERATOR <expression> ";"
// <expression>           ::= INTEGER | FLOAT | LITERAL

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{error}")]
pub struct ParseError {
    pub line: usize,
    #[source]
    pub error: ParseErrorType,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    #[error("Expected {expected} but found {found} at line {line}")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        line: usize,
    },

    #[error("Unexpected token {found} at line {line}")]
    UnexpectedToken { found: TokenKind, line: usize },

    #[error("Missing semicolon after {target} = {value}. Expected ';' at line {line}")]
    MissingSemicolon {
        target: String,
        value: TokenValue,
        line: usize,
    },

    #[error("Unexpected end of input: expected {expected} after line {line}")]
    UnexpectedEof { expected: String, line: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'d, 'l> {
    tokens: MultiPeek<<Vec<Token> as IntoIterator>::IntoIter>,
    position: usize,
    last_line: usize,
    diagnostics: &'d mut Diagnostics<'l>,
}

impl<'d, 'l> Parser<'d, 'l> {
    pub fn new(tokens: Vec<Token>, diagnostics: &'d mut Diagnostics<'l>) -> Self {
        Self {
            tokens: multipeek(tokens.into_iter()),
            position: 0,
            last_line: 1,
            diagnostics,
        }
    }

    fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    fn peek_kind(&mut self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.next();
        if let Some(t) = &token {
            self.last_line = t.line;
            self.position += 1;
        }
        token
    }

    fn advance_if<F>(&mut self, pred: F) -> Option<Token>
    where
        F: FnOnce(&Token) -> bool,
    {
        if self.peek().is_some_and(pred) {
            self.advance()
        } else {
            None
        }
    }

    /// Builds the error and reports it straight away so listeners see it
    /// before any recovery happens.
    fn error(&mut self, error: ParseErrorType) -> ParseError {
        let line = match &error {
            ParseErrorType::Expected { line, .. }
            | ParseErrorType::UnexpectedToken { line, .. }
            | ParseErrorType::MissingSemicolon { line, .. }
            | ParseErrorType::UnexpectedEof { line, .. } => *line,
        };
        self.diagnostics
            .report(Diagnostic::error(error.to_string(), Some(line)));
        ParseError { line, error }
    }

    fn unexpected(&mut self, expected: &'static str) -> ParseError {
        match self.peek().map(|t| (t.kind, t.line)) {
            Some((found, line)) => self.error(ParseErrorType::UnexpectedToken { found, line }),
            None => {
                let line = self.last_line;
                self.error(ParseErrorType::UnexpectedEof {
                    expected: expected.to_string(),
                    line,
                })
            }
        }
    }

    pub fn match_kind(&mut self, expected: TokenKind) -> ParseResult<Token> {
        if let Some(token) = self.advance_if(|t| t.kind == expected) {
            return Ok(token);
        }

        match self.peek().map(|t| (t.kind, t.line)) {
            Some((found, line)) => Err(self.error(ParseErrorType::Expected {
                expected,
                found,
                line,
            })),
            None => {
                let line = self.last_line;
                Err(self.error(ParseErrorType::UnexpectedEof {
                    expected: expected.to_string(),
                    line,
                }))
            }
        }
    }

    fn peek_next_kind(&mut self) -> Option<TokenKind> {
        self.tokens.peek_nth(1).map(|t| t.kind)
    }

    /// Whether the current token opens a fresh assignment on a line after
    /// `statement_line`: an identifier followed by an operator.
    fn at_later_statement(&mut self, statement_line: usize) -> bool {
        let starts_later = self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Identifier && t.line > statement_line);
        starts_later && self.peek_next_kind() == Some(TokenKind::Operator)
    }

    /// Skips the rest of a malformed statement. Stops at a punctuator
    /// (consuming it when it is `;`) or where a new assignment starts on a
    /// later line than `statement_line`.
    pub fn synchronize(&mut self, statement_line: usize) {
        let mut skipped = 0;
        while let Some(kind) = self.peek_kind() {
            if kind == TokenKind::Punctuator || self.at_later_statement(statement_line) {
                break;
            }
            self.advance();
            skipped += 1;
        }

        self.advance_if(|t| t.is_punctuator(";"));
        debug!(skipped, line = self.last_line, "synchronized");
    }
}

impl<'d, 'l> Parser<'d, 'l> {
    pub fn program(&mut self) -> Program {
        let mut statements = Vec::new();
        while let Some(line) = self.peek().map(|t| t.line) {
            let start = self.position;
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(_) => {
                    self.synchronize(line);
                    // a stray non-`;` punctuator stops synchronize without
                    // being consumed
                    if self.position == start {
                        self.advance();
                    }
                }
            }
        }
        debug!(statements = statements.len(), "parsing finished");
        Program(statements)
    }

    pub fn statement(&mut self) -> ParseResult<Assignment> {
        match self.peek_kind() {
            Some(TokenKind::Identifier) => self.assignment_statement(),
            _ => Err(self.unexpected("statement")),
        }
    }

    pub fn assignment_statement(&mut self) -> ParseResult<Assignment> {
        let target = self.match_kind(TokenKind::Identifier)?;
        let operator = self.match_kind(TokenKind::Operator)?;
        let value = self.expression()?;

        if self.advance_if(|t| t.is_punctuator(";")).is_none() {
            return Err(self.error(ParseErrorType::MissingSemicolon {
                target: target.value.to_string(),
                value: value.value,
                line: target.line,
            }));
        }

        Ok(Assignment {
            target: target.value.to_string(),
            operator: operator.value.to_string(),
            value: value.value,
            value_kind: value.kind,
            line: target.line,
        })
    }

    pub fn expression(&mut self) -> ParseResult<Token> {
        match self.peek_kind() {
            Some(kind) if kind.is_value() => self.match_kind(kind),
            _ => Err(self.unexpected("expression")),
        }
    }
}
