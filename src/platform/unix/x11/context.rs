//! Wrapper for GLX contexts.
//!
//! GLX entry points are resolved through `glXGetProcAddress`, which is itself
//! looked up in `libGL.so` with `dlopen`. GL entry points for a context go
//! through the same resolver.

use crate::error::{Error, WindowingApiError};
use crate::gl::types::GLubyte;
use crate::glx::types::{Display as GlxDisplay, GLXContext, GLXDrawable};
use crate::glx::Glx;
use super::error;

use libc::{dlopen, dlsym, RTLD_LAZY};
use log::debug;
use std::cell::Cell;
use std::ffi::CString;
use std::mem;
use std::os::raw::{c_int, c_void};
use std::ptr;
use x11::glx::{GLX_ALPHA_SIZE, GLX_BLUE_SIZE, GLX_DEPTH_SIZE, GLX_DOUBLEBUFFER, GLX_GREEN_SIZE};
use x11::glx::{GLX_RED_SIZE, GLX_RGBA, GLX_STENCIL_SIZE};
use x11::xlib::{self, Display, Window, XDefaultScreen, XErrorEvent, XSetErrorHandler};
use x11::xlib::XVisualInfo;

thread_local! {
    static LAST_X_ERROR_CODE: Cell<u8> = Cell::new(0);
}

thread_local! {
    static GLX_FUNCTIONS: Glx = Glx::load_with(get_proc_address);
}

lazy_static! {
    static ref GLX_GET_PROC_ADDRESS: unsafe extern "C" fn(*const GLubyte) -> *mut c_void = {
        unsafe {
            let library_name = &b"libGL.so\0"[0] as *const u8 as *const i8;
            let library = dlopen(library_name, RTLD_LAZY);
            assert!(!library.is_null());

            let symbol = &b"glXGetProcAddress\0"[0] as *const u8 as *const i8;
            let function = dlsym(library, symbol);
            assert!(!function.is_null());
            mem::transmute(function)
        }
    };
}

/// Chooses a double-buffered RGBA visual with depth and stencil, matching
/// what the demo's pixel formats look like on the other backends.
pub(crate) unsafe fn choose_visual(display: *mut Display) -> Result<*mut XVisualInfo, Error> {
    GLX_FUNCTIONS.with(|glx| {
        let mut attributes = [
            GLX_RGBA,
            GLX_DOUBLEBUFFER,
            GLX_RED_SIZE,     8,
            GLX_GREEN_SIZE,   8,
            GLX_BLUE_SIZE,    8,
            GLX_ALPHA_SIZE,   8,
            GLX_DEPTH_SIZE,   24,
            GLX_STENCIL_SIZE, 8,
            0,
        ];

        let visual_info = glx.ChooseVisual(
            display as *mut GlxDisplay,
            XDefaultScreen(display),
            attributes.as_mut_ptr(),
        );
        if visual_info.is_null() {
            return Err(Error::NoPixelFormatFound);
        }
        Ok(visual_info as *mut XVisualInfo)
    })
}

/// Creates a direct rendering context for the visual.
///
/// `glXCreateContext` reports failure through the X error handler as often as
/// through its return value, so one is installed for the duration of the
/// call.
pub(crate) unsafe fn create_context(
    display: *mut Display,
    visual_info: *mut XVisualInfo,
) -> Result<GLXContext, Error> {
    GLX_FUNCTIONS.with(|glx| {
        let prev_error_handler = XSetErrorHandler(Some(xlib_error_handler));
        let glx_context = glx.CreateContext(
            display as *mut GlxDisplay,
            visual_info as *mut _,
            ptr::null_mut(),
            xlib::True,
        );
        XSetErrorHandler(prev_error_handler);

        if glx_context.is_null() {
            let windowing_api_error = LAST_X_ERROR_CODE.with(|last_x_error_code| {
                error::xlib_error_to_windowing_api_error(display, last_x_error_code.get())
            });
            return Err(Error::ContextCreationFailed(windowing_api_error));
        }

        debug!("created GLX context");
        Ok(glx_context)
    })
}

pub(crate) unsafe fn make_current(
    display: *mut Display,
    window: Window,
    glx_context: GLXContext,
) -> Result<(), Error> {
    GLX_FUNCTIONS.with(|glx| {
        let ok = glx.MakeCurrent(display as *mut GlxDisplay, window as GLXDrawable, glx_context);
        if ok == xlib::False {
            return Err(Error::MakeCurrentFailed(WindowingApiError::Failed));
        }
        Ok(())
    })
}

pub(crate) unsafe fn destroy_context(display: *mut Display, glx_context: GLXContext) {
    GLX_FUNCTIONS.with(|glx| {
        glx.MakeCurrent(display as *mut GlxDisplay, 0, ptr::null_mut());
        glx.DestroyContext(display as *mut GlxDisplay, glx_context);
    });
}

pub(crate) unsafe fn swap_buffers(display: *mut Display, window: Window) {
    GLX_FUNCTIONS.with(|glx| {
        glx.SwapBuffers(display as *mut GlxDisplay, window as GLXDrawable);
    });
}

pub(crate) fn get_proc_address(symbol_name: &str) -> *const c_void {
    unsafe {
        let symbol_name: CString = CString::new(symbol_name).unwrap();
        (*GLX_GET_PROC_ADDRESS)(symbol_name.as_ptr() as *const u8) as *const c_void
    }
}

unsafe extern "C" fn xlib_error_handler(_: *mut Display, event: *mut XErrorEvent) -> c_int {
    LAST_X_ERROR_CODE.with(|error_code| error_code.set((*event).error_code));
    0
}
