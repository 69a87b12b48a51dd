// triwin/src/platform/unix/x11/window.rs
//
//! Xlib windows with a GLX context attached.

use crate::error::Error;
use crate::event::{Event, Key};
use crate::gl::Gl;
use crate::gl_utils;
use crate::glx::types::GLXContext;
use super::context;

use euclid::default::Size2D;
use log::debug;
use std::ffi::CString;
use std::mem;
use std::os::raw::{c_long, c_uint, c_void};
use std::ptr;
use x11::keysym::{XK_Escape, XK_Q, XK_q};
use x11::xlib::{self, Atom, Colormap, CWColormap, Display, InputOutput, KeyPressMask, KeySym};
use x11::xlib::{Window as XWindow, XCloseDisplay, XCreateColormap, XCreateWindow};
use x11::xlib::{XDefaultRootWindow, XDestroyWindow, XEvent, XFree, XFreeColormap, XInternAtom};
use x11::xlib::{XLookupKeysym, XMapWindow, XNextEvent, XOpenDisplay, XPending, XSelectInput};
use x11::xlib::{XSetWMProtocols, XSetWindowAttributes, XStoreName};

/// A mapped X11 window with a current GLX context.
///
/// Dropping the window unbinds and destroys the context, destroys the window,
/// and closes the display connection.
pub struct Window {
    display: *mut Display,
    colormap: Colormap,
    window: XWindow,
    wm_delete_window: Atom,
    glx_context: GLXContext,
    gl: Gl,
}

impl Window {
    /// Connects to the default display and creates a visible window of the
    /// given client size with a current GLX context.
    pub fn new(title: &str, size: &Size2D<u32>) -> Result<Window, Error> {
        unsafe {
            let display = XOpenDisplay(ptr::null());
            if display.is_null() {
                return Err(Error::ConnectionFailed);
            }

            let visual_info = match context::choose_visual(display) {
                Ok(visual_info) => visual_info,
                Err(err) => {
                    XCloseDisplay(display);
                    return Err(err);
                }
            };

            let root = XDefaultRootWindow(display);
            let colormap = XCreateColormap(display, root, (*visual_info).visual, xlib::AllocNone);

            let mut window_attributes: XSetWindowAttributes = mem::zeroed();
            window_attributes.colormap = colormap;

            let window = XCreateWindow(
                display,
                root,
                0,
                0,
                size.width as c_uint,
                size.height as c_uint,
                0,
                (*visual_info).depth,
                InputOutput as c_uint,
                (*visual_info).visual,
                CWColormap,
                &mut window_attributes,
            );

            let title = CString::new(title).unwrap();
            XStoreName(display, window, title.as_ptr());

            XSelectInput(display, window, KeyPressMask);

            // Ask the window manager to send a close message rather than
            // killing our connection.
            let mut wm_delete_window = XInternAtom(
                display,
                &b"WM_DELETE_WINDOW\0"[0] as *const u8 as *const i8,
                xlib::False,
            );
            XSetWMProtocols(display, window, &mut wm_delete_window, 1);

            let glx_context = match context::create_context(display, visual_info) {
                Ok(glx_context) => glx_context,
                Err(err) => {
                    XFree(visual_info as *mut c_void);
                    XDestroyWindow(display, window);
                    XFreeColormap(display, colormap);
                    XCloseDisplay(display);
                    return Err(err);
                }
            };
            XFree(visual_info as *mut c_void);

            if let Err(err) = context::make_current(display, window, glx_context) {
                context::destroy_context(display, glx_context);
                XDestroyWindow(display, window);
                XFreeColormap(display, colormap);
                XCloseDisplay(display);
                return Err(err);
            }

            XMapWindow(display, window);

            let gl = Gl::load_with(context::get_proc_address);

            debug!("created {}x{} X11 window", size.width, size.height);

            // Dropping the window tears everything down if the entry-point
            // check fails.
            let window = Window {
                display,
                colormap,
                window,
                wm_delete_window,
                glx_context,
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

    /// Takes at most one event off the queue and translates it. Never
    /// blocks.
    pub fn poll_event(&mut self) -> Option<Event> {
        unsafe {
            if XPending(self.display) <= 0 {
                return None;
            }

            let mut event: XEvent = mem::zeroed();
            XNextEvent(self.display, &mut event);

            match event.get_type() {
                xlib::ClientMessage => {
                    // Only the WM_DELETE_WINDOW protocol is registered, so
                    // any client message with the delete atom is a close
                    // request.
                    if event.client_message.data.get_long(0)
                        == self.wm_delete_window as c_long
                    {
                        Some(Event::CloseRequested)
                    } else {
                        None
                    }
                }
                xlib::KeyPress => {
                    let keysym = XLookupKeysym(&mut event.key, 0);
                    Some(Event::KeyPressed(map_keysym(keysym)))
                }
                _ => None,
            }
        }
    }

    /// Presents the back buffer. May block on vertical sync, depending on
    /// the driver.
    #[inline]
    pub fn swap_buffers(&self) {
        unsafe {
            context::swap_buffers(self.display, self.window);
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe {
            context::destroy_context(self.display, self.glx_context);
            XDestroyWindow(self.display, self.window);
            XFreeColormap(self.display, self.colormap);
            XCloseDisplay(self.display);
        }
    }
}

pub(crate) fn map_keysym(keysym: KeySym) -> Key {
    match keysym as c_uint {
        XK_Escape => Key::Escape,
        XK_q | XK_Q => Key::Q,
        _ => Key::Other,
    }
}
