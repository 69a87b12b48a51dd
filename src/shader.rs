// triwin/src/shader.rs
//
//! Shader and program objects, with compile and link status checking.
//!
//! This is the only place in the crate with any branching to speak of: each
//! object's status flag is checked once, and on failure the variable-length
//! info log is fetched and returned with the error. Nothing is retried.

use crate::error::Error;
use crate::gl::types::{GLchar, GLenum, GLint, GLuint};
use crate::gl::{self, Gl};

use std::ptr;

pub struct Program {
    pub object: GLuint,
    #[allow(dead_code)]
    vertex_shader: Shader,
    #[allow(dead_code)]
    fragment_shader: Shader,
}

impl Program {
    /// Links the two shaders into a program, checking the link status.
    pub fn new(gl: &Gl, vertex_shader: Shader, fragment_shader: Shader) -> Result<Program, Error> {
        unsafe {
            let program = gl.CreateProgram();
            gl.AttachShader(program, vertex_shader.object);
            gl.AttachShader(program, fragment_shader.object);
            gl.LinkProgram(program);

            let mut link_status = 0;
            gl.GetProgramiv(program, gl::LINK_STATUS, &mut link_status);
            if link_status != gl::TRUE as GLint {
                let mut info_log_length = 0;
                gl.GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut info_log_length);
                let info_log = if info_log_length > 1 {
                    let mut info_log = vec![0u8; info_log_length as usize];
                    gl.GetProgramInfoLog(
                        program,
                        info_log_length,
                        ptr::null_mut(),
                        info_log.as_mut_ptr() as *mut GLchar,
                    );
                    String::from_utf8_lossy(&info_log)
                        .trim_end_matches('\0')
                        .to_string()
                } else {
                    String::new()
                };
                return Err(Error::ProgramLinkFailed(info_log));
            }

            Ok(Program {
                object: program,
                vertex_shader,
                fragment_shader,
            })
        }
    }
}

pub struct Shader {
    object: GLuint,
}

impl Shader {
    /// Compiles a shader of the given kind, checking the compile status.
    pub fn new(gl: &Gl, kind: ShaderKind, source: &str) -> Result<Shader, Error> {
        unsafe {
            let shader = gl.CreateShader(kind.to_gl());
            gl.ShaderSource(
                shader,
                1,
                &(source.as_ptr() as *const GLchar),
                &(source.len() as GLint),
            );
            gl.CompileShader(shader);

            let mut compile_status = 0;
            gl.GetShaderiv(shader, gl::COMPILE_STATUS, &mut compile_status);
            if compile_status != gl::TRUE as GLint {
                let mut info_log_length = 0;
                gl.GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut info_log_length);
                let info_log = if info_log_length > 1 {
                    let mut info_log = vec![0u8; info_log_length as usize];
                    gl.GetShaderInfoLog(
                        shader,
                        info_log_length,
                        ptr::null_mut(),
                        info_log.as_mut_ptr() as *mut GLchar,
                    );
                    String::from_utf8_lossy(&info_log)
                        .trim_end_matches('\0')
                        .to_string()
                } else {
                    String::new()
                };
                return Err(Error::ShaderCompilationFailed(info_log));
            }

            Ok(Shader { object: shader })
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub(crate) fn to_gl(self) -> GLenum {
        match self {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}
