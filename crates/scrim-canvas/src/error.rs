use std::fmt;

/// Error returned by canvas draw and path operations.
///
/// Every variant is local to the failing call: the call renders nothing and
/// leaves the rest of the frame untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// A parameter is outside its accepted domain (unknown style name, negative radius, ...).
    InvalidArgument(String),
    /// A path operation was issued with no path started by `path_begin_from`.
    NoActivePath,
    /// An image could not be read or decoded.
    Image(String),
    /// The pixel buffer could not be encoded.
    Encode(String),
}

impl CanvasError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::NoActivePath => f.write_str("no active path; call path_begin_from first"),
            Self::Image(msg) => write!(f, "image error: {msg}"),
            Self::Encode(msg) => write!(f, "encode error: {msg}"),
        }
    }
}

impl std::error::Error for CanvasError {}
