//! Platform-specific backends.

#[cfg(linux)]
pub mod unix;
#[cfg(linux)]
pub use unix::x11 as default;

#[cfg(windows)]
pub mod windows;
#[cfg(windows)]
pub use windows::wgl as default;
