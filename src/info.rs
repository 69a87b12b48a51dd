//! OpenGL implementation information.

use crate::gl::types::GLenum;
use crate::gl::{self, Gl};

use std::ffi::CStr;
use std::os::raw::c_char;

/// The vendor, version, and renderer strings the driver reports for the
/// current context.
#[derive(Clone, Debug)]
pub struct GLInfo {
    pub vendor: String,
    pub version: String,
    pub renderer: String,
}

impl GLInfo {
    /// Queries the context that is current on this thread.
    pub fn new(gl: &Gl) -> GLInfo {
        GLInfo {
            vendor: get_string(gl, gl::VENDOR),
            version: get_string(gl, gl::VERSION),
            renderer: get_string(gl, gl::RENDERER),
        }
    }
}

fn get_string(gl: &Gl, name: GLenum) -> String {
    unsafe {
        let string = gl.GetString(name) as *const c_char;
        if string.is_null() {
            return String::new();
        }
        CStr::from_ptr(string).to_string_lossy().into_owned()
    }
}
