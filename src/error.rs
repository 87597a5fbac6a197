use std::{error, fmt, io};

// -------------------------------------------------------------------------------------------------

/// Errors reported by the outer shell (sinks and the driver loop).
///
/// The synthesis core itself never fails: every operation is total over its input.
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    OutputDeviceError(Box<dyn error::Error + Send + Sync>),
    SinkClosed,
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputDeviceError(err) => err.fmt(f),
            Self::SinkClosed => write!(f, "Audio sink is closed"),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

#[cfg(feature = "wav")]
impl From<hound::Error> for Error {
    fn from(err: hound::Error) -> Error {
        match err {
            hound::Error::IoError(err) => Error::IoError(err),
            other => Error::OutputDeviceError(Box::new(other)),
        }
    }
}
