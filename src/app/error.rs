use std::fmt;
use std::io;

/// An error that terminates the run with a non-zero exit status.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Expectation(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Expectation(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "Cannot read log file cause: {}", err),
            Error::Expectation(err) => write!(f, "Expectation violated: {}", err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
