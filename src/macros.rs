// triwin/src/macros.rs
//
//! Macros.

/// Exports the symbols that make Nvidia and AMD drivers on Windows pick the
/// discrete GPU for our contexts.
#[macro_export]
macro_rules! declare_gpu_preference {
    () => {
        #[cfg(target_os = "windows")]
        #[link_section = ".drectve"]
        #[no_mangle]
        pub static _TRIWIN_LINK_ARGS: [u8; 74] =
            *b" /export:NvOptimusEnablement /export:AmdPowerXpressRequestHighPerformance ";
        #[cfg(target_os = "windows")]
        #[no_mangle]
        pub static NvOptimusEnablement: i32 = 1;
        #[cfg(target_os = "windows")]
        #[no_mangle]
        pub static AmdPowerXpressRequestHighPerformance: i32 = 1;
    };
}
