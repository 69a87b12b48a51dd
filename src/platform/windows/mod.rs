// triwin/src/platform/windows/mod.rs
//
//! Windows support via the native WGL interface.

pub mod wgl;
