use miette::{Diagnostic, SourceSpan};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

#[derive(Debug, Diagnostic)]
pub enum HuekitError {
    #[diagnostic(code(huekit::hex_format), url(docsrs))]
    HexFormat {
        #[source_code]
        src: String,
        #[label("expected 3 or 6 hex digits")]
        err_span: SourceSpan,
        msg: String,
    },

    #[diagnostic(code(huekit::hex_digit), url(docsrs))]
    HexDigit {
        #[source_code]
        src: String,
        #[label("not a hexadecimal digit")]
        err_span: SourceSpan,
        msg: String,
    },
}

pub type HuekitResult<T> = miette::Result<T>;

// Helper functions to create errors with context
impl Display for HuekitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            HuekitError::HexFormat { msg, .. } => write!(f, "HEX format error: {}", msg),
            HuekitError::HexDigit { msg, .. } => write!(f, "HEX digit error: {}", msg),
        }
    }
}

impl Error for HuekitError {}

impl HuekitError {
    pub fn hex_format(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::HexFormat {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }

    pub fn hex_digit(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::HexDigit {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }
}
