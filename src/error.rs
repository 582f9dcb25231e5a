use std::env;
use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Configuration,
    Serialization,
    InvalidArgument,
    InvalidRideType,
    Unknown,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self.code {
            1 => ErrorKind::Configuration,
            2 => ErrorKind::Io,
            3 => ErrorKind::Serialization,
            101 => ErrorKind::InvalidArgument,
            102 => ErrorKind::InvalidRideType,
            _ => ErrorKind::Unknown,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_invalid_ride_type(&self) -> bool {
        self.kind() == ErrorKind::InvalidRideType
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        io_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        serialization_error(err)
    }
}

pub fn invalid_argument_error(message: impl Into<String>) -> Error {
    Error {
        code: 101,
        message: message.into(),
    }
}

pub fn invalid_ride_type_error(token: &str) -> Error {
    Error {
        code: 102,
        message: format!(
            "Unsupported ride type '{}'. We only offer bike and car rides at the moment. Please enter a valid option.",
            token
        ),
    }
}

pub fn configuration_error(message: impl Into<String>) -> Error {
    Error {
        code: 1,
        message: message.into(),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        code: 1,
        message: format!("environment variable error: {}", err),
    }
}

pub fn io_error(err: io::Error) -> Error {
    Error {
        code: 2,
        message: format!("console error: {}", err),
    }
}

pub fn serialization_error(err: serde_json::Error) -> Error {
    Error {
        code: 3,
        message: format!("serialization error: {}", err),
    }
}
