use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CssError {
    #[error("empty CSS value")]
    Empty,

    #[error("CSS injection blocked: contains '{0}'")]
    Injection(String),

    #[error("invalid CSS identifier: '{0}'")]
    InvalidIdentifier(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SpinwindError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("theme.rotate is not a table".into());
        assert_eq!(
            err.to_string(),
            "config validation error: theme.rotate is not a table"
        );
    }

    #[test]
    fn css_error_display() {
        assert_eq!(CssError::Empty.to_string(), "empty CSS value");
        assert_eq!(
            CssError::Injection("url(".into()).to_string(),
            "CSS injection blocked: contains 'url('"
        );
        assert_eq!(
            CssError::InvalidIdentifier("a b".into()).to_string(),
            "invalid CSS identifier: 'a b'"
        );
    }

    #[test]
    fn spinwind_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: SpinwindError = config_err.into();
        assert!(matches!(err, SpinwindError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn spinwind_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file gone");
        let err: SpinwindError = io_err.into();
        assert!(matches!(err, SpinwindError::Io(_)));
        assert!(err.to_string().contains("file gone"));
    }

    #[test]
    fn spinwind_error_other() {
        let err = SpinwindError::Other("something unexpected".into());
        assert_eq!(err.to_string(), "something unexpected");
    }
}
