// triwin/build.rs
//
//! The `triwin` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        windows: { target_os = "windows" },
        macos: { target_os = "macos" },
        android: { target_os = "android" },
        linux: { all(unix, not(any(macos, android))) },
    }

    let target_family = env::var("CARGO_CFG_TARGET_FAMILY").ok();
    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Generate GL bindings. The demo shaders are `#version 130`, so a 3.0
    // compatibility registry is enough.
    let mut file = File::create(&dest.join("gl_bindings.rs")).unwrap();
    let registry = Registry::new(Api::Gl, (3, 0), Profile::Compatibility, Fallbacks::All, []);
    registry.write_bindings(StructGenerator, &mut file).unwrap();

    // Generate GLX bindings.
    if target_family.as_ref().map_or(false, |f| f == "unix") {
        let mut file = File::create(&dest.join("glx_bindings.rs")).unwrap();
        let registry = Registry::new(Api::Glx, (1, 4), Profile::Core, Fallbacks::All, []);
        registry.write_bindings(StructGenerator, &mut file).unwrap();
    }
}
