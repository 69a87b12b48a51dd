// triwin/src/gl_utils.rs
//
//! Miscellaneous OpenGL utilities.

use crate::error::Error;
use crate::gl::Gl;

/// Checks that the entry points the render loop calls actually resolved.
///
/// `Gl::load_with` stores a null pointer for any symbol the resolver doesn't
/// know, and the bindings would only fail on the first call. Checking up
/// front turns that into a reportable error at window creation time.
pub(crate) fn ensure_core_entry_points(gl: &Gl) -> Result<(), Error> {
    let all_loaded = gl.GetString.is_loaded()
        && gl.CreateShader.is_loaded()
        && gl.CreateProgram.is_loaded()
        && gl.GenBuffers.is_loaded()
        && gl.Clear.is_loaded()
        && gl.DrawArrays.is_loaded();
    if all_loaded {
        Ok(())
    } else {
        Err(Error::GLFunctionNotFound)
    }
}
