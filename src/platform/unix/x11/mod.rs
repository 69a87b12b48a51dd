//! Xlib windowing with GLX contexts.

pub mod context;
pub mod window;

mod error;
