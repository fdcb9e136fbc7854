use std::{
    error::Error,
    fmt::{self, Display},
};

pub type ExtendResult<T> = Result<T, Box<ExtendError>>;

/// Use `ExtendError::kind` when matching on error kinds
#[derive(Debug, Clone)]
pub struct ExtendError {
    kind: ExtendErrorKind,
}

impl ExtendError {
    pub(crate) fn circular(selector: String, target: String) -> Box<Self> {
        Box::new(Self {
            kind: ExtendErrorKind::CircularExtend { selector, target },
        })
    }

    pub(crate) fn render(message: impl Into<String>) -> Box<Self> {
        Box::new(Self {
            kind: ExtendErrorKind::Render(message.into()),
        })
    }

    #[must_use]
    pub fn kind(self) -> PublicExtendErrorKind {
        match self.kind {
            ExtendErrorKind::CircularExtend { selector, target } => {
                PublicExtendErrorKind::CircularExtend { selector, target }
            }
            ExtendErrorKind::Render(message) => PublicExtendErrorKind::Render(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PublicExtendErrorKind {
    /// Chaining kept producing new extends past the configured limit. Holds
    /// the extending selector and its target, rendered on a best-effort basis.
    CircularExtend { selector: String, target: String },

    /// A selector could not be rendered to CSS
    Render(String),
}

#[derive(Debug, Clone)]
enum ExtendErrorKind {
    CircularExtend { selector: String, target: String },
    Render(String),
}

impl Display for ExtendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExtendErrorKind::CircularExtend { selector, target } => write!(
                f,
                "extend circular reference detected. One of the circular extends is currently:{}:extend({})",
                selector, target
            ),
            ExtendErrorKind::Render(message) => f.write_str(message),
        }
    }
}

impl Error for ExtendError {
    #[allow(deprecated)]
    fn description(&self) -> &'static str {
        "LESS extend error"
    }
}
