// triwin/src/tests.rs
//
//! Unit tests for the pieces that don't need a display server.

use crate::gl;
use crate::shader::ShaderKind;

#[test]
fn shader_kinds_map_to_gl_enums() {
    assert_eq!(ShaderKind::Vertex.to_gl(), gl::VERTEX_SHADER);
    assert_eq!(ShaderKind::Fragment.to_gl(), gl::FRAGMENT_SHADER);
}

#[test]
fn unresolved_entry_points_are_an_error() {
    let gl = gl::Gl::load_with(|_| std::ptr::null());
    match crate::gl_utils::ensure_core_entry_points(&gl) {
        Err(crate::Error::GLFunctionNotFound) => {}
        other => panic!("expected GLFunctionNotFound, got {:?}", other),
    }
}

#[test]
fn resolved_entry_points_pass_the_check() {
    // Any non-null pointer counts as resolved; nothing is called through it.
    let gl = gl::Gl::load_with(|_| 8 as *const std::os::raw::c_void);
    assert!(crate::gl_utils::ensure_core_entry_points(&gl).is_ok());
}

#[test]
fn shader_errors_carry_the_info_log() {
    let error = crate::Error::ShaderCompilationFailed("0:3(1): error: syntax error".to_string());
    match error {
        crate::Error::ShaderCompilationFailed(log) => assert!(log.contains("syntax error")),
        _ => unreachable!(),
    }
}

#[cfg(linux)]
mod x11_window {
    use crate::event::Key;
    use crate::platform::unix::x11::window::map_keysym;
    use x11::keysym::{XK_Escape, XK_F1, XK_Q, XK_q};
    use x11::xlib::KeySym;

    #[test]
    fn escape_and_q_are_quit_keys() {
        assert_eq!(map_keysym(XK_Escape as KeySym), Key::Escape);
        assert_eq!(map_keysym(XK_q as KeySym), Key::Q);
        assert_eq!(map_keysym(XK_Q as KeySym), Key::Q);
    }

    #[test]
    fn other_keysyms_map_to_other() {
        assert_eq!(map_keysym(XK_F1 as KeySym), Key::Other);
    }
}

#[cfg(windows)]
mod wgl_window {
    use crate::event::Key;
    use crate::platform::windows::wgl::window::map_virtual_key;
    use winapi::shared::minwindef::WPARAM;
    use winapi::um::winuser::{VK_ESCAPE, VK_SPACE};

    #[test]
    fn escape_and_q_are_quit_keys() {
        assert_eq!(map_virtual_key(VK_ESCAPE as WPARAM), Key::Escape);
        assert_eq!(map_virtual_key(b'Q' as WPARAM), Key::Q);
    }

    #[test]
    fn other_virtual_keys_map_to_other() {
        assert_eq!(map_virtual_key(VK_SPACE as WPARAM), Key::Other);
    }
}
