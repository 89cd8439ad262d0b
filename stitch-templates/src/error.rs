use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for template operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no template module matches '{token}'")]
    #[diagnostic(
        code(stitch::unknown_token),
        help(
            "tokens match a module name, a category, or a name prefix; run without --add to browse the available modules interactively"
        )
    )]
    UnknownToken { token: String },

    #[error("no modules selected")]
    #[diagnostic(
        code(stitch::empty_selection),
        help("pick at least one template module before composing a schema")
    )]
    EmptySelection,

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error tied to the path that failed
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create an unknown-token error
    pub fn unknown_token(token: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownToken {
            token: token.into(),
        })
    }
}
