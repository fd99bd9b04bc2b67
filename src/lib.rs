use diagnostics::{Diagnostic, Diagnostics};
use lexer::symbol_table::SymbolTable;
use lexer::token::Token;
use lexer::{Lexed, Lexer};
use parser::{ast::Program, Parser};
use tracing::debug;

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod report;

/// Everything one run produces: the token list and symbol table from the
/// lexer, the statements the parser accepted, and every diagnostic in the
/// order it was raised.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    pub fn is_success(&self) -> bool {
        self.errors().next().is_none()
    }
}

pub fn compile(input: &str) -> anyhow::Result<Compilation> {
    run(input, Diagnostics::new())
}

/// Like [`compile`], but `listener` is called for each diagnostic at the
/// moment it is raised.
pub fn compile_with_listener<F>(input: &str, listener: F) -> anyhow::Result<Compilation>
where
    F: FnMut(&Diagnostic),
{
    run(input, Diagnostics::with_listener(listener))
}

fn run(input: &str, mut diagnostics: Diagnostics<'_>) -> anyhow::Result<Compilation> {
    let Lexed {
        tokens,
        symbols,
        diagnostics: lexer_diagnostics,
    } = Lexer::new(input).analyze()?;
    diagnostics.extend(lexer_diagnostics);

    // the token list is kept for display, so the parser gets a copy
    let program = Parser::new(tokens.clone(), &mut diagnostics).program();

    let diagnostics = diagnostics.into_vec();
    debug!(
        statements = program.0.len(),
        diagnostics = diagnostics.len(),
        "compilation finished"
    );

    Ok(Compilation {
        tokens,
        symbols,
        program,
        diagnostics,
    })
}
