use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("{input} is not a valid {expected}.")]
    #[diagnostic(code(projects::cli::invalid_input))]
    InvalidInput {
        input: String,
        expected: &'static str,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error("Console I/O failed: {0}")]
    #[diagnostic(code(projects::cli::io))]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
