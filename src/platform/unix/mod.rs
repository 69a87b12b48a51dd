// triwin/src/platform/unix/mod.rs
//
//! Backends specific to Unix-like systems, particularly Linux.

#[cfg(linux)]
pub mod x11;
