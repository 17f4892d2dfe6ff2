use std::error::Error as StdError;
use std::fmt;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not use anyhow/eyre/thiserror etc?

- Better control over how errors are rendered (see the Debug impl below)
- No dependencies to compile and integrate
- Span traces are captured where the error is created
 */

/// Error variants that can occur in greeter operations.
#[derive(Debug)]
pub enum ErrorKind {
    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/* 📖 # Why separate ErrorKind and GreeterError?
ErrorKind holds the structural variant callers can match on.
GreeterError adds the runtime context strings, an optional cause and the span trace.
*/

/// Error type wrapping an [`ErrorKind`] with context, cause and span trace.
pub struct GreeterError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<GreeterError>>,
    span_trace: SpanTrace,
}

impl GreeterError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    /// Shorthand for an [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that caused this one.
    pub fn caused_by(mut self, cause: impl Into<Box<GreeterError>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn cause(&self) -> Option<&GreeterError> {
        self.cause.as_deref()
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Returns the innermost error in the source chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn write_branches(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        let branch_count = self.context.len() + usize::from(self.cause.is_some());
        for (i, context) in self.context.iter().enumerate() {
            let branch = if i + 1 == branch_count { "└─" } else { "├─" };
            writeln!(f, "{indent}{branch} {context}")?;
        }
        if let Some(cause) = &self.cause {
            writeln!(f, "{indent}└─ cause: {}", cause.kind)?;
            cause.write_branches(f, &format!("{indent}   "))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for GreeterError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for GreeterError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl fmt::Display for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for context in &self.context {
            write!(f, "{}: ", context)?;
        }
        write!(f, "{}", self.kind)
    }
}

/* 📖 # Why a hand-written Debug impl?
`main` prints errors with `{:?}`, so Debug is what users see.
The tree layout keeps the message first, then each context and cause on its own line.
*/
impl fmt::Debug for GreeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        self.write_branches(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/* 📖 # Why use Box<GreeterError> in the result type?

Boxing the error reduces the size of the result type, making it more efficient to return in the common case.

*/

/// Standard result type for greeter operations.
pub type GreeterResult<T> = std::result::Result<T, Box<GreeterError>>;

/// Extension trait for attaching context to Results during propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error; eager evaluation.
    fn context(self, context: impl Into<String>) -> GreeterResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for GreeterResult<T> {
    fn context(self, context: impl Into<String>) -> GreeterResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> GreeterResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}
