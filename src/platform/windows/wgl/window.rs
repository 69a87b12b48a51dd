// triwin/src/platform/windows/wgl/window.rs
//
//! Win32 windows with a WGL context attached.

use crate::error::Error;
use crate::event::{Event, Key};
use crate::gl::Gl;
use crate::gl_utils;
use super::context;

use euclid::default::Size2D;
use log::debug;
use std::ffi::CString;
use std::mem;
use std::ptr;
use winapi::shared::minwindef::{FALSE, LPARAM, LRESULT, UINT, WPARAM};
use winapi::shared::windef::{HDC, HGLRC, HWND, RECT};
use winapi::um::libloaderapi;
use winapi::um::wingdi;
use winapi::um::winuser::{self, CS_OWNDC, HTCAPTION, IDC_ARROW, MSG, PM_REMOVE, VK_ESCAPE};
use winapi::um::winuser::{WM_CLOSE, WM_KEYDOWN, WM_NCHITTEST, WM_QUIT, WNDCLASSA};
use winapi::um::winuser::{WS_OVERLAPPEDWINDOW, WS_VISIBLE};

const VK_Q: i32 = b'Q' as i32;

/// A visible Win32 window with a current WGL context.
///
/// Dropping the window unbinds and deletes the context, releases the DC,
/// destroys the window, and unregisters its class.
pub struct Window {
    window: HWND,
    window_class: CString,
    dc: HDC,
    glrc: HGLRC,
    gl: Gl,
}

impl Window {
    /// Registers a window class and creates a visible window of the given
    /// client size with a current WGL context.
    pub fn new(title: &str, size: &Size2D<u32>) -> Result<Window, Error> {
        unsafe {
            let instance = libloaderapi::GetModuleHandleA(ptr::null());
            let window_class = CString::new(format!("{} class", title)).unwrap();

            let mut window_class_descriptor: WNDCLASSA = mem::zeroed();
            window_class_descriptor.style = CS_OWNDC;
            window_class_descriptor.lpfnWndProc = Some(window_proc);
            window_class_descriptor.hInstance = instance;
            window_class_descriptor.hCursor =
                winuser::LoadCursorW(ptr::null_mut(), IDC_ARROW);
            window_class_descriptor.lpszClassName = window_class.as_ptr();

            let window_class_atom = winuser::RegisterClassA(&window_class_descriptor);
            if window_class_atom == 0 {
                return Err(Error::WindowCreationFailed);
            }

            let style = WS_OVERLAPPEDWINDOW | WS_VISIBLE;

            // The requested size is the client area, not the outer frame.
            let mut window_rect = RECT {
                left: 0,
                top: 0,
                right: size.width as i32,
                bottom: size.height as i32,
            };
            winuser::AdjustWindowRect(&mut window_rect, style, FALSE);

            let title = CString::new(title).unwrap();
            let window = winuser::CreateWindowExA(
                0,
                window_class.as_ptr(),
                title.as_ptr(),
                style,
                winuser::CW_USEDEFAULT,
                winuser::CW_USEDEFAULT,
                window_rect.right - window_rect.left,
                window_rect.bottom - window_rect.top,
                ptr::null_mut(),
                ptr::null_mut(),
                instance,
                ptr::null_mut(),
            );
            if window.is_null() {
                winuser::UnregisterClassA(window_class.as_ptr(), instance);
                return Err(Error::WindowCreationFailed);
            }

            let dc = winuser::GetDC(window);
            let glrc = match context::create_context(dc) {
                Ok(glrc) => glrc,
                Err(err) => {
                    winuser::ReleaseDC(window, dc);
                    winuser::DestroyWindow(window);
                    winuser::UnregisterClassA(window_class.as_ptr(), instance);
                    return Err(err);
                }
            };

            // `wglGetProcAddress` needs a current context, so the GL table
            // must be loaded after `create_context`.
            let gl = Gl::load_with(context::get_proc_address);

            debug!("created {}x{} Win32 window", size.width, size.height);

            // Dropping the window tears everything down if the entry-point
            // check fails.
            let window = Window {
                window,
                window_class,
                dc,
                glrc,
                gl,
            };
            gl_utils::ensure_core_entry_points(&window.gl)?;
            Ok(window)
        }
    }

    /// Returns the GL function table for this window's context.
    #[inline]
    pub fn gl(&self) -> &Gl {
        &self.gl
    }

    /// Pumps at most one message per call and translates it. Never blocks.
    pub fn poll_event(&mut self) -> Option<Event> {
        unsafe {
            let mut msg: MSG = mem::zeroed();
            if winuser::PeekMessageA(&mut msg, ptr::null_mut(), 0, 0, PM_REMOVE) == FALSE {
                return None;
            }

            if msg.message == WM_QUIT {
                return Some(Event::CloseRequested);
            }

            // Keys are taken off the queue before dispatch so that quit
            // policy stays in the application, as on the other backends.
            if msg.message == WM_KEYDOWN {
                return Some(Event::KeyPressed(map_virtual_key(msg.wParam)));
            }

            winuser::TranslateMessage(&msg);
            winuser::DispatchMessageA(&msg);
            None
        }
    }

    /// Presents the back buffer. May block on vertical sync, depending on
    /// the driver.
    #[inline]
    pub fn swap_buffers(&self) {
        unsafe {
            wingdi::SwapBuffers(self.dc);
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe {
            context::destroy_context(self.glrc);
            winuser::ReleaseDC(self.window, self.dc);
            winuser::DestroyWindow(self.window);
            winuser::UnregisterClassA(
                self.window_class.as_ptr(),
                libloaderapi::GetModuleHandleA(ptr::null()),
            );
        }
    }
}

extern "system" fn window_proc(
    window: HWND,
    message: UINT,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe {
        match message {
            WM_CLOSE => {
                winuser::PostQuitMessage(0);
                0
            }
            // Lets the user drag the window from anywhere in the client
            // area.
            WM_NCHITTEST => HTCAPTION as LRESULT,
            _ => winuser::DefWindowProcA(window, message, wparam, lparam),
        }
    }
}

pub(crate) fn map_virtual_key(virtual_key: WPARAM) -> Key {
    match virtual_key as i32 {
        VK_ESCAPE => Key::Escape,
        VK_Q => Key::Q,
        _ => Key::Other,
    }
}
