use colored::Colorize;

use crate::diagnostics::{Diagnostic, Severity};
use crate::lexer::symbol_table::SymbolTable;
use crate::lexer::token::Token;
use crate::Compilation;

const ABSENT: &str = "None";

/// A plain grid of cells drawn with box-drawing characters.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell_width(cell: &str) -> usize {
        cell.split('\n').map(|l| l.chars().count()).max().unwrap_or(0)
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| Self::cell_width(h))
            .collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(Self::cell_width(cell));
            }
        }
        widths
    }

    fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
    }

    /// One physical line per `\n`-separated piece of the tallest cell.
    fn lines(widths: &[usize], cells: &[String]) -> Vec<String> {
        let pieces: Vec<Vec<&str>> = cells.iter().map(|c| c.split('\n').collect()).collect();
        let height = pieces.iter().map(Vec::len).max().unwrap_or(1);

        (0..height)
            .map(|i| {
                let padded: Vec<String> = widths
                    .iter()
                    .zip(&pieces)
                    .map(|(w, cell)| {
                        let piece = cell.get(i).copied().unwrap_or("");
                        let pad = w - piece.chars().count();
                        format!(" {piece}{} ", " ".repeat(pad))
                    })
                    .collect();
                format!("│{}│", padded.join("│"))
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = vec![Self::rule(&widths, "╒", "╤", "╕").replace('─', "═")];
        out.extend(Self::lines(&widths, &self.headers));
        out.push(Self::rule(&widths, "╞", "╪", "╡").replace('─', "═"));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push(Self::rule(&widths, "├", "┼", "┤"));
            }
            out.extend(Self::lines(&widths, row));
        }
        out.push(Self::rule(&widths, "╘", "╧", "╛").replace('─', "═"));
        out.join("\n")
    }
}

pub fn render_tokens(tokens: &[Token]) -> String {
    let mut table = Table::new(&["Token Type", "Value", "Line"]);
    for token in tokens {
        table.push_row(vec![
            token.kind.to_string(),
            token.value.to_string(),
            token.line.to_string(),
        ]);
    }
    table.render()
}

pub fn render_symbols(symbols: &SymbolTable) -> String {
    let mut table = Table::new(&["Identifier", "Data Type", "Line"]);
    for (name, entry) in symbols.iter() {
        let data_type = entry
            .data_type
            .map_or_else(|| ABSENT.to_string(), |t| t.to_string());
        table.push_row(vec![name.clone(), data_type, entry.line.to_string()]);
    }
    table.render()
}

pub fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    match diagnostic.severity {
        Severity::Error => diagnostic.to_string().red().to_string(),
        Severity::Warning => diagnostic.to_string().yellow().to_string(),
    }
}

pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(render_diagnostic)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tables when the compilation succeeded, the diagnostic summary otherwise.
/// Warnings are listed above the tables.
pub fn render(compilation: &Compilation) -> String {
    if !compilation.is_success() {
        return render_diagnostics(&compilation.diagnostics);
    }

    let mut sections = Vec::new();
    if !compilation.diagnostics.is_empty() {
        sections.push(render_diagnostics(&compilation.diagnostics));
    }
    sections.push(render_tokens(&compilation.tokens));
    sections.push(render_symbols(&compilation.symbols));
    sections.join("\n")
}
