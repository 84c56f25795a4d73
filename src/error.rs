use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pmap operations
#[derive(Error, Diagnostic, Debug)]
pub enum PmapError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pmap::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pmap::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(pmap::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Load error: {message}")]
    #[diagnostic(code(pmap::load))]
    Load {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(pmap::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Check failed: {message}")]
    #[diagnostic(code(pmap::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PmapError>;
