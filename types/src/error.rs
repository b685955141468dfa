use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A cloneable, serializable error for rendering in the UI.
///
/// `chain` holds the top-level message followed by each underlying cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
    pub chain: Vec<String>,
}

impl Error {
    pub fn has_causes(&self) -> bool {
        self.chain.len() > 1
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(report: anyhow::Error) -> Self {
        Self {
            message: report.to_string(),
            chain: report.chain().map(|cause| cause.to_string()).collect(),
        }
    }
}

/// Build an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_anyhow_dont_use!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn err_macro_formats_message() {
        let e = crate::err!("missing {}", "email");
        assert_eq!(e.message, "missing email");
        assert_eq!(e.chain, vec!["missing email".to_string()]);
        assert!(!e.has_causes());
    }

    #[test]
    fn chain_includes_causes() {
        let report = Err::<(), _>(anyhow::anyhow!("root cause"))
            .context("outer")
            .unwrap_err();
        let e = Error::from(report);
        assert_eq!(e.message, "outer");
        assert_eq!(e.chain, vec!["outer".to_string(), "root cause".to_string()]);
        assert!(e.has_causes());
        assert_eq!(e.to_string(), "outer");
    }
}
