//! Win32 windowing with WGL contexts.

pub mod context;
pub mod window;
