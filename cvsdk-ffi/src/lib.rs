//! C Foreign Function Interface for the CV SDK status registry.
//!
//! This crate exposes the code-to-message lookup to C and other languages
//! via P/Invoke. All returned strings are NUL-terminated static data owned
//! by the library; callers must never free or mutate them, and the pointers
//! stay valid for the lifetime of the process.

use cvsdk_core::CvStatus;
use libc::{c_char, c_int};

/// Get the version string of the SDK.
#[no_mangle]
pub extern "C" fn cvsdk_get_version() -> *const c_char {
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr() as *const c_char
}

/// Get the error string corresponding to the given status code.
///
/// Defined for every integer input: codes outside the declared set map to a
/// fixed "unrecognized" message, never to a null or empty result.
#[no_mangle]
pub extern "C" fn cvsdk_get_error_string(code: c_int) -> *const c_char {
    let msg: &'static [u8] = match CvStatus::from_raw(code) {
        Some(CvStatus::Success) => b"The procedure returned successfully.\0",
        Some(CvStatus::ErrorGeneral) => b"An otherwise unspecified error has occurred.\0",
        Some(CvStatus::ErrorUnimplemented) => b"The requested feature is not yet implemented.\0",
        Some(CvStatus::ErrorMemory) => {
            b"There is not enough memory for the requested operation.\0"
        }
        Some(CvStatus::ErrorEffect) => b"An invalid effect handle has been supplied.\0",
        Some(CvStatus::ErrorSelector) => {
            b"The given parameter selector is not valid in this effect filter.\0"
        }
        Some(CvStatus::ErrorBuffer) => b"An image buffer has not been specified.\0",
        Some(CvStatus::ErrorParameter) => {
            b"An invalid parameter value has been supplied for this effect and selector.\0"
        }
        Some(CvStatus::ErrorMismatch) => b"Some parameters are not appropriately matched.\0",
        Some(CvStatus::ErrorPixelFormat) => b"The specified pixel format is not accommodated.\0",
        Some(CvStatus::ErrorModel) => b"The inference model could not be loaded.\0",
        Some(CvStatus::ErrorLibrary) => b"The dynamic library could not be loaded.\0",
        Some(CvStatus::ErrorInitialization) => {
            b"The effect has not been properly initialized.\0"
        }
        Some(CvStatus::ErrorFile) => b"The file could not be found.\0",
        Some(CvStatus::ErrorFeatureNotFound) => b"The requested feature was not found.\0",
        Some(CvStatus::ErrorMissingInput) => b"A required input parameter was not set.\0",
        Some(CvStatus::ErrorResolution) => {
            b"The specified image resolution is not supported.\0"
        }
        Some(CvStatus::ErrorCudaMemory) => {
            b"There is not enough CUDA memory for the requested operation.\0"
        }
        Some(CvStatus::ErrorCudaValue) => {
            b"A CUDA parameter is not within the acceptable range.\0"
        }
        Some(CvStatus::ErrorCudaPitch) => b"A CUDA pitch is not within the acceptable range.\0",
        Some(CvStatus::ErrorCudaInit) => {
            b"The CUDA driver and runtime could not be initialized.\0"
        }
        Some(CvStatus::ErrorCudaLaunch) => b"The CUDA kernel launch has failed.\0",
        Some(CvStatus::ErrorCudaKernel) => {
            b"No suitable kernel image is available for the device.\0"
        }
        Some(CvStatus::ErrorCudaDriver) => {
            b"The installed CUDA driver is older than the CUDA runtime library.\0"
        }
        Some(CvStatus::ErrorCudaUnsupported) => {
            b"The CUDA operation is not supported on the current system or device.\0"
        }
        Some(CvStatus::ErrorCudaIllegalAddress) => {
            b"CUDA tried to load or store on an invalid memory address.\0"
        }
        Some(CvStatus::ErrorCuda) => {
            b"An otherwise unspecified CUDA error has been reported.\0"
        }
        None => b"Unrecognized status code.\0",
    };
    msg.as_ptr() as *const c_char
}

/// Whether the given status code denotes success.
#[no_mangle]
pub extern "C" fn cvsdk_status_is_success(code: c_int) -> bool {
    code == CvStatus::Success as c_int
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn lookup(code: c_int) -> &'static str {
        let ptr = cvsdk_get_error_string(code);
        assert!(!ptr.is_null());
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    #[test]
    fn every_declared_code_matches_the_core_table() {
        for status in CvStatus::ALL {
            assert_eq!(lookup(status as c_int), status.description());
        }
    }

    #[test]
    fn undeclared_codes_return_the_fallback() {
        for code in [9999, 1, -17, -29, i32::MIN] {
            let msg = lookup(code);
            assert!(!msg.is_empty());
            assert_eq!(msg, "Unrecognized status code.");
        }
    }

    #[test]
    fn repeated_lookups_return_the_same_pointer() {
        let code = CvStatus::ErrorCudaLaunch as c_int;
        assert_eq!(cvsdk_get_error_string(code), cvsdk_get_error_string(code));
    }

    #[test]
    fn success_predicate_matches_the_success_code() {
        assert!(cvsdk_status_is_success(0));
        assert!(!cvsdk_status_is_success(-1));
        assert!(!cvsdk_status_is_success(9999));
    }

    #[test]
    fn version_string_is_well_formed() {
        let ptr = cvsdk_get_version();
        assert!(!ptr.is_null());
        let version = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert!(!version.is_empty());
    }
}
