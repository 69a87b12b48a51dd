// triwin/src/error.rs
//
//! Various errors that methods can produce.

/// Various errors that methods can produce.
#[derive(Debug)]
pub enum Error {
    /// A connection to the display server could not be opened.
    ConnectionFailed,
    /// The system couldn't choose a pixel format or visual.
    NoPixelFormatFound,
    /// The system couldn't apply the chosen pixel format to the drawable.
    PixelFormatSelectionFailed(WindowingApiError),
    /// The system couldn't create the native window.
    WindowCreationFailed,
    /// The system couldn't create an OpenGL context.
    ContextCreationFailed(WindowingApiError),
    /// The system couldn't make the OpenGL context current or not current.
    MakeCurrentFailed(WindowingApiError),
    /// A required OpenGL entry point couldn't be resolved.
    GLFunctionNotFound,
    /// A shader failed to compile. The payload is the driver's info log,
    /// empty if the driver reported none.
    ShaderCompilationFailed(String),
    /// The shader program failed to link. The payload is the driver's info
    /// log, empty if the driver reported none.
    ProgramLinkFailed(String),
}

/// Abstraction of the errors that GLX and WGL return.
///
/// They both tend to follow similar patterns.
#[derive(Clone, Copy, Debug)]
pub enum WindowingApiError {
    /// Miscellaneous error.
    Failed,
    /// X11: Arguments are inconsistent, e.g. the visual doesn't match the
    /// drawable.
    BadMatch,
    /// X11: Invalid value.
    BadValue,
}
