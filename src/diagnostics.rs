use std::fmt::Display;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn error(message: String, line: Option<usize>) -> Self {
        Self {
            severity: Severity::Error,
            message,
            line,
        }
    }

    pub fn warning(message: String, line: Option<usize>) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            line,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "Syntax Error: {}", self.message),
            Severity::Warning => write!(f, "Warning: {}", self.message),
        }
    }
}

/// Collects diagnostics in the order they are raised. A listener, when
/// present, sees each record synchronously before it is stored.
#[derive(Default)]
pub struct Diagnostics<'a> {
    records: Vec<Diagnostic>,
    listener: Option<Box<dyn FnMut(&Diagnostic) + 'a>>,
}

impl<'a> Diagnostics<'a> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            listener: None,
        }
    }

    pub fn with_listener<F>(listener: F) -> Self
    where
        F: FnMut(&Diagnostic) + 'a,
    {
        Self {
            records: Vec::new(),
            listener: Some(Box::new(listener)),
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        debug!(severity = ?diagnostic.severity, line = ?diagnostic.line, "{}", diagnostic.message);
        if let Some(listener) = self.listener.as_mut() {
            listener(&diagnostic);
        }
        self.records.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for d in diagnostics {
            self.report(d);
        }
    }

    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    pub fn has_errors(&self) -> bool {
        self.records.iter().any(Diagnostic::is_error)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.records
    }
}

impl std::fmt::Debug for Diagnostics<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("records", &self.records)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
