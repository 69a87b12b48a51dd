// triwin/src/platform/windows/wgl/context.rs
//
//! Wrapper for WGL contexts.

use crate::error::{Error, WindowingApiError};

use std::ffi::CString;
use std::mem;
use std::os::raw::c_void;
use std::ptr;
use winapi::shared::minwindef::{FALSE, HMODULE, WORD};
use winapi::shared::ntdef::LPCSTR;
use winapi::shared::windef::{HDC, HGLRC};
use winapi::um::libloaderapi;
use winapi::um::wingdi::{self, PFD_DOUBLEBUFFER, PFD_DRAW_TO_WINDOW, PFD_GENERIC_ACCELERATED};
use winapi::um::wingdi::{PFD_MAIN_PLANE, PFD_SUPPORT_OPENGL, PFD_TYPE_RGBA, PIXELFORMATDESCRIPTOR};
use winapi::um::wingdi::{wglCreateContext, wglDeleteContext, wglGetCurrentContext};
use winapi::um::wingdi::{wglGetProcAddress, wglMakeCurrent};

/// Wrapper to satisfy `Sync`.
struct HMODULEWrapper(HMODULE);
unsafe impl Sync for HMODULEWrapper {}

lazy_static! {
    static ref OPENGL_LIBRARY: Option<HMODULEWrapper> = {
        unsafe {
            let module =
                libloaderapi::LoadLibraryA(&b"opengl32.dll\0"[0] as *const u8 as LPCSTR);
            if module.is_null() {
                None
            } else {
                Some(HMODULEWrapper(module))
            }
        }
    };
}

/// Sets a double-buffered RGBA pixel format on the DC and creates and binds
/// a WGL context for it.
pub(crate) unsafe fn create_context(dc: HDC) -> Result<HGLRC, Error> {
    let mut pixel_format_descriptor: PIXELFORMATDESCRIPTOR = mem::zeroed();
    pixel_format_descriptor.nSize = mem::size_of::<PIXELFORMATDESCRIPTOR>() as WORD;
    pixel_format_descriptor.nVersion = 1;
    pixel_format_descriptor.dwFlags =
        PFD_SUPPORT_OPENGL | PFD_GENERIC_ACCELERATED | PFD_DRAW_TO_WINDOW | PFD_DOUBLEBUFFER;
    pixel_format_descriptor.iPixelType = PFD_TYPE_RGBA;
    pixel_format_descriptor.cColorBits = 32;
    pixel_format_descriptor.iLayerType = PFD_MAIN_PLANE;

    let pixel_format = wingdi::ChoosePixelFormat(dc, &pixel_format_descriptor);
    if pixel_format == 0 {
        return Err(Error::NoPixelFormatFound);
    }
    if wingdi::SetPixelFormat(dc, pixel_format, &pixel_format_descriptor) == FALSE {
        return Err(Error::PixelFormatSelectionFailed(WindowingApiError::Failed));
    }

    let glrc = wglCreateContext(dc);
    if glrc.is_null() {
        return Err(Error::ContextCreationFailed(WindowingApiError::Failed));
    }
    if wglMakeCurrent(dc, glrc) == FALSE {
        wglDeleteContext(glrc);
        return Err(Error::MakeCurrentFailed(WindowingApiError::Failed));
    }

    Ok(glrc)
}

pub(crate) unsafe fn destroy_context(glrc: HGLRC) {
    if wglGetCurrentContext() == glrc {
        wglMakeCurrent(ptr::null_mut(), ptr::null_mut());
    }
    wglDeleteContext(glrc);
}

/// `wglGetProcAddress` only resolves extension entry points; the GL 1.1
/// functions live in `opengl32.dll` itself.
pub(crate) fn get_proc_address(symbol_name: &str) -> *const c_void {
    unsafe {
        let symbol_name: CString = CString::new(symbol_name).unwrap();
        let address = wglGetProcAddress(symbol_name.as_ptr());
        if !address.is_null() {
            return address as *const c_void;
        }
        match *OPENGL_LIBRARY {
            Some(ref library) => {
                libloaderapi::GetProcAddress(library.0, symbol_name.as_ptr()) as *const c_void
            }
            None => ptr::null(),
        }
    }
}
