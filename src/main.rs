// triwin/src/main.rs
//
//! Draws a static triangle in a native window.
//!
//! The scene is fixed: a pass-through shader pair and a single vertex buffer
//! of three vertices. Escape or Q, or closing the window, quits.

use euclid::default::Size2D;
use std::mem;
use std::os::raw::c_void;
use std::process;
use std::ptr;
use triwin::gl::types::{GLchar, GLfloat, GLsizeiptr, GLuint};
use triwin::gl::{self, Gl};
use triwin::{Error, Event, GLInfo, Key, Program, Shader, ShaderKind, Window};

triwin::declare_gpu_preference!();

const WINDOW_WIDTH: u32 = 512;
const WINDOW_HEIGHT: u32 = 512;

static VERTEX_SHADER_SOURCE: &str = "\
#version 130
in vec4 position;
out vec2 uv;

void main() {
  gl_Position = position;
  uv = (position.xy + 1.0) / 2.0;
}
";

static FRAGMENT_SHADER_SOURCE: &str = "\
#version 130
in vec2 uv;
out vec4 color;

void main() {
  color = vec4(uv, 0.0, 1.0);
}
";

static TRIANGLE_VERTICES: [GLfloat; 6] = [
    -1.0,  1.0,
    -1.0, -1.0,
     1.0, -1.0,
];

fn main() {
    env_logger::init();

    let size = Size2D::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut window = match Window::new("Triangle", &size) {
        Ok(window) => window,
        Err(err) => {
            eprintln!("Failed to create window: {:?}", err);
            process::exit(1);
        }
    };

    let info = GLInfo::new(window.gl());
    println!("GL_VENDOR: {}", info.vendor);
    println!("GL_VERSION: {}", info.version);
    println!("GL_RENDERER: {}", info.renderer);

    if let Err(err) = init_scene(window.gl()) {
        report_scene_error(&err);
        process::exit(1);
    }

    loop {
        if let Some(event) = window.poll_event() {
            if should_quit(&event) {
                break;
            }
        }

        let gl = window.gl();
        unsafe {
            gl.Clear(gl::COLOR_BUFFER_BIT);
            gl.DrawArrays(gl::TRIANGLES, 0, 3);
        }

        window.swap_buffers();
    }
}

/// Compiles and links the shaders, uploads the vertex buffer, and leaves the
/// pipeline bound. The GL objects live for the rest of the process.
fn init_scene(gl: &Gl) -> Result<(), Error> {
    let vertex_shader = Shader::new(gl, ShaderKind::Vertex, VERTEX_SHADER_SOURCE)?;
    let fragment_shader = Shader::new(gl, ShaderKind::Fragment, FRAGMENT_SHADER_SOURCE)?;
    let program = Program::new(gl, vertex_shader, fragment_shader)?;

    unsafe {
        let mut vertex_buffer = 0;
        gl.GenBuffers(1, &mut vertex_buffer);
        gl.BindBuffer(gl::ARRAY_BUFFER, vertex_buffer);
        gl.BufferData(
            gl::ARRAY_BUFFER,
            mem::size_of_val(&TRIANGLE_VERTICES) as GLsizeiptr,
            TRIANGLE_VERTICES.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        );

        gl.UseProgram(program.object);

        let position_attribute =
            gl.GetAttribLocation(program.object, &b"position\0"[0] as *const u8 as *const GLchar);
        gl.EnableVertexAttribArray(position_attribute as GLuint);
        gl.BindBuffer(gl::ARRAY_BUFFER, vertex_buffer);
        gl.VertexAttribPointer(
            position_attribute as GLuint,
            2,
            gl::FLOAT,
            gl::FALSE,
            0,
            ptr::null(),
        );
    }

    Ok(())
}

fn report_scene_error(err: &Error) {
    match *err {
        Error::ShaderCompilationFailed(ref log) if !log.is_empty() => {
            eprintln!("Shader compile failed:\n{}", log);
        }
        Error::ShaderCompilationFailed(_) => eprintln!("Shader compile failed."),
        Error::ProgramLinkFailed(ref log) if !log.is_empty() => {
            eprintln!("Program link failed:\n{}", log);
        }
        Error::ProgramLinkFailed(_) => eprintln!("Program link failed."),
        ref other => eprintln!("Scene initialization failed: {:?}", other),
    }
}

fn should_quit(event: &Event) -> bool {
    match *event {
        Event::CloseRequested => true,
        Event::KeyPressed(Key::Escape) | Event::KeyPressed(Key::Q) => true,
        Event::KeyPressed(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_escape_and_q_quit() {
        assert!(should_quit(&Event::CloseRequested));
        assert!(should_quit(&Event::KeyPressed(Key::Escape)));
        assert!(should_quit(&Event::KeyPressed(Key::Q)));
    }

    #[test]
    fn other_keys_do_not_quit() {
        assert!(!should_quit(&Event::KeyPressed(Key::Other)));
    }

    #[test]
    fn the_scene_is_one_triangle() {
        // Two components per vertex, three vertices.
        assert_eq!(TRIANGLE_VERTICES.len(), 6);
    }

    #[test]
    fn shader_sources_are_well_formed() {
        for source in &[VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE] {
            assert!(source.starts_with("#version 130\n"));
        }
        assert!(VERTEX_SHADER_SOURCE.contains("in vec4 position;"));
        assert!(FRAGMENT_SHADER_SOURCE.contains("out vec4 color;"));
    }
}
