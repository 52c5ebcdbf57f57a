use core::fmt;

/// Errors of the setup sequence
///
/// The animation itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The framebuffer memory is smaller than `width * height` bytes
    FramebufferTooSmall { required: usize, actual: usize },
    /// The console device rejected a write
    Console,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FramebufferTooSmall { required, actual } => write!(
                f,
                "framebuffer too small: {actual} bytes, {required} required"
            ),
            Self::Console => f.write_str("console write failed"),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::Console
    }
}

impl core::error::Error for Error {}
