pub mod symbol_table;
pub mod token;

#[cfg(test)]
mod test;

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::str::Chars;
use thiserror::Error;
use tracing::{debug, trace};

use crate::diagnostics::Diagnostic;
use symbol_table::{DataType, SymbolTable};
use token::{Token, TokenKind, TokenValue};

macro_rules! hash_map {
    ( $( $key: expr => $value: expr ),* $(,)? ) => {{
        let mut m = HashMap::new();
        $(
            m.insert($key, $value);
        )*
        m
    }}
}

lazy_static! {
    static ref TYPE_KEYWORDS: HashMap<&'static str, DataType> = hash_map! {
        "char"  => DataType::Char,
        "float" => DataType::Float,
        "int"   => DataType::Int,
    };
}

const OPERATORS: [&str; 5] = ["+", "-", "*", "/", "="];
const PUNCTUATORS: [&str; 4] = [";", ",", "'", "\""];

fn is_symbol_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '=' | ';' | ',' | '\'' | '"')
}

#[derive(Error, Debug)]
pub enum LexerErrorType {
    #[error("invalid numeric literal `{lexeme}`: {reason}")]
    InvalidNumber { lexeme: String, reason: String },
}

#[derive(Error, Debug)]
#[error("{error} (line {line})")]
pub struct LexerError {
    pub line: usize,
    #[source]
    pub error: LexerErrorType,
}

/// Output of one scan over the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
}

pub type LexerResult<T> = Result<T, LexerError>;

pub struct Lexer<'a> {
    input: Chars<'a>,
    line: usize,
    pending_type: Option<DataType>,
    tokens: Vec<Token>,
    symbols: SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub fn new(input_str: &'a str) -> Self {
        Self {
            input: input_str.chars(),
            line: 1,
            pending_type: None,
            tokens: Vec::new(),
            symbols: SymbolTable::new(),
            diagnostics: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.clone().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.input.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    /// Consumes characters while `pred` holds and returns them.
    fn take_while<F>(&mut self, pred: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let mut lexeme = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
            lexeme.push(c);
        }
        lexeme
    }

    fn push_token(&mut self, kind: TokenKind, value: TokenValue, line: usize) {
        trace!(%kind, %value, line, "token");
        self.tokens.push(Token::new(kind, value, line));
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn identifier(&mut self) {
        let line = self.line;
        let name = self.take_while(|c| c == '_' || c.is_alphanumeric());

        if let Some(data_type) = TYPE_KEYWORDS.get(name.as_str()) {
            self.pending_type = Some(*data_type);
            return;
        }

        if self.symbols.register(&name, self.pending_type, line) {
            debug!(%name, data_type = ?self.pending_type, line, "new symbol");
        }
        self.push_token(TokenKind::Identifier, TokenValue::Text(name), line);
    }

    fn number(&mut self) -> LexerResult<()> {
        let line = self.line;
        let lexeme = self.take_while(|c| c == '.' || c.is_ascii_digit());

        let invalid = |reason: String| LexerError {
            line,
            error: LexerErrorType::InvalidNumber {
                lexeme: lexeme.clone(),
                reason,
            },
        };

        if lexeme.contains('.') {
            let float = lexeme
                .parse::<f64>()
                .map_err(|e| invalid(e.to_string()))?;
            self.push_token(TokenKind::Float, TokenValue::Float(float), line);
        } else {
            let int = lexeme
                .parse::<i64>()
                .map_err(|e| invalid(e.to_string()))?;
            self.push_token(TokenKind::Integer, TokenValue::Integer(int), line);
        }
        Ok(())
    }

    fn string(&mut self, quote: char) {
        let line = self.line;
        let mut literal = String::new();
        if let Some(c) = self.advance() {
            literal.push(c);
        }

        let mut terminated = false;
        while let Some(c) = self.advance() {
            literal.push(c);
            if c == quote {
                terminated = true;
                break;
            }
        }

        if !terminated {
            self.diagnostics.push(Diagnostic::warning(
                format!("Unterminated string literal starting at line {line}"),
                Some(line),
            ));
        }
        self.push_token(TokenKind::Literal, TokenValue::Text(literal), line);
    }

    /// Takes the longest run of operator/punctuator characters, then gives
    /// characters back from its end until the run is a known symbol.
    fn symbol(&mut self) {
        let line = self.line;
        let mut run: String = self
            .input
            .clone()
            .take_while(|c| is_symbol_char(*c))
            .collect();

        while !run.is_empty()
            && !OPERATORS.contains(&run.as_str())
            && !PUNCTUATORS.contains(&run.as_str())
        {
            run.pop();
        }

        for _ in run.chars() {
            self.advance();
        }

        if OPERATORS.contains(&run.as_str()) {
            self.push_token(TokenKind::Operator, TokenValue::Text(run), line);
        } else if PUNCTUATORS.contains(&run.as_str()) {
            self.push_token(TokenKind::Punctuator, TokenValue::Text(run), line);
        } else if let Some(c) = self.advance() {
            trace!(?c, line, "skipping unrecognized character");
        }
    }
}

impl<'a> Lexer<'a> {
    pub fn analyze(mut self) -> LexerResult<Lexed> {
        while let Some(c) = self.peek() {
            match c {
                c if c.is_whitespace() => self.skip_whitespace(),
                c if c == '_' || c.is_alphabetic() => self.identifier(),
                c if c == '.' || c.is_ascii_digit() => self.number()?,
                '"' | '\'' => self.string(c),
                _ => self.symbol(),
            }
        }

        debug!(
            tokens = self.tokens.len(),
            symbols = self.symbols.len(),
            "lexing finished"
        );

        Ok(Lexed {
            tokens: self.tokens,
            symbols: self.symbols,
            diagnostics: self.diagnostics,
        })
    }
}
