//! Translation of X11 errors to `triwin` errors.

use crate::WindowingApiError;

use std::os::raw::{c_char, c_int};
use x11::xlib::{Display, XGetErrorText};

pub(crate) fn xlib_error_to_windowing_api_error(
    display: *mut Display,
    xlib_error: u8,
) -> WindowingApiError {
    unsafe {
        let mut error_text: Vec<u8> = vec![0; 256];
        XGetErrorText(
            display,
            xlib_error as c_int,
            error_text.as_mut_ptr() as *mut c_char,
            error_text.len() as c_int - 1,
        );
        // Core errors come back as e.g. "BadMatch (invalid parameter
        // attributes)", so match the name alone.
        if error_text.starts_with(b"BadMatch") {
            WindowingApiError::BadMatch
        } else if error_text.starts_with(b"BadValue") {
            WindowingApiError::BadValue
        } else {
            WindowingApiError::Failed
        }
    }
}
