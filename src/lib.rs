//! Cross-platform window and OpenGL context management.
//!
//! This crate is the hand-written glue a small OpenGL program needs on each
//! operating system: open a native window, create a GL rendering context,
//! resolve GL entry points dynamically, and pump the native event queue. It
//! deliberately stops there; anything fancier is the territory of winit,
//! Glutin, SDL, and friends.

#[macro_use]
extern crate lazy_static;

pub mod platform;
pub use platform::default::window::Window;

pub mod error;
pub use crate::error::{Error, WindowingApiError};

mod event;
pub use crate::event::{Event, Key};

mod gl_utils;

mod info;
pub use crate::info::GLInfo;

pub mod shader;
pub use crate::shader::{Program, Shader, ShaderKind};

mod macros;

pub mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

#[cfg(linux)]
mod glx {
    include!(concat!(env!("OUT_DIR"), "/glx_bindings.rs"));
}

#[cfg(test)]
mod tests;
