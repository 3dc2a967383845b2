mod icq;

#[cfg(feature = "obj-io")]
mod obj;

#[cfg(feature = "stl-io")]
mod stl;

pub use icq::{from_icq_str, to_icq_string};

#[cfg(feature = "obj-io")]
pub use obj::to_obj_string;

#[cfg(feature = "stl-io")]
pub use stl::{to_stl_ascii, to_stl_binary};

/// Generic I/O and format‑conversion errors.
///
/// Some I/O backends are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    ParseFloat(std::num::ParseFloatError),
    ParseInt(std::num::ParseIntError),

    MalformedInput(String),

    /// The parsed vertex list does not form a well-shaped lattice.
    InvalidShape(crate::errors::ValidationError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            ParseFloat(error) => write!(f, "Could not parse float: {error}"),
            ParseInt(error) => write!(f, "Could not parse integer: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),

            InvalidShape(error) => write!(f, "Input is not a well-shaped lattice: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<std::num::ParseFloatError> for IoError {
    fn from(value: std::num::ParseFloatError) -> Self {
        Self::ParseFloat(value)
    }
}

impl From<std::num::ParseIntError> for IoError {
    fn from(value: std::num::ParseIntError) -> Self {
        Self::ParseInt(value)
    }
}

impl From<crate::errors::ValidationError> for IoError {
    fn from(value: crate::errors::ValidationError) -> Self {
        Self::InvalidShape(value)
    }
}
