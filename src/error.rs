use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error("{what} {index} out of range for length {len}")]
    OutOfRange { what: &'static str, index: usize, len: usize },
}

impl Error {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>)
    -> Error {
        Error::InvalidArgument { name, reason: reason.into() }
    }

    pub fn out_of_range(what: &'static str, index: usize, len: usize)
    -> Error {
        Error::OutOfRange { what, index, len }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with the error built by `error` when `value` is true.
pub fn error_if(value: bool, error: impl FnOnce() -> Error) -> Result<()> {
    if value {
        Err(error())
    } else {
        Ok(())
    }
}

pub fn error_if_not(value: bool, error: impl FnOnce() -> Error)
-> Result<()> {
    error_if(!value, error)
}
