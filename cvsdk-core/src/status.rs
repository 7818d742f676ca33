use std::fmt;

/// Status codes returned from SDK entry points.
///
/// Discriminants are part of the published interface: external callers
/// compare against them by value, so a value must never be renumbered or
/// reused for a different meaning. Success is 0 and every failure code is
/// strictly negative. Codes at -20 and below belong to the CUDA subsystem
/// so that each subsystem can grow without colliding with the others.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CvStatus {
    Success = 0,
    ErrorGeneral = -1,
    ErrorUnimplemented = -2,
    ErrorMemory = -3,
    ErrorEffect = -4,
    ErrorSelector = -5,
    ErrorBuffer = -6,
    ErrorParameter = -7,
    ErrorMismatch = -8,
    ErrorPixelFormat = -9,
    ErrorModel = -10,
    ErrorLibrary = -11,
    ErrorInitialization = -12,
    ErrorFile = -13,
    ErrorFeatureNotFound = -14,
    ErrorMissingInput = -15,
    ErrorResolution = -16,

    ErrorCudaMemory = -20,
    ErrorCudaValue = -21,
    ErrorCudaPitch = -22,
    ErrorCudaInit = -23,
    ErrorCudaLaunch = -24,
    ErrorCudaKernel = -25,
    ErrorCudaDriver = -26,
    ErrorCudaUnsupported = -27,
    ErrorCudaIllegalAddress = -28,
    ErrorCuda = -30,
}

impl Default for CvStatus {
    fn default() -> Self {
        CvStatus::Success
    }
}

/// First code of the CUDA subsystem range.
const CUDA_RANGE_START: i32 = -20;

/// Message returned for integers that are not declared status codes.
const UNRECOGNIZED: &str = "Unrecognized status code.";

impl CvStatus {
    /// Every declared status code, in declaration order.
    pub const ALL: [CvStatus; 27] = [
        CvStatus::Success,
        CvStatus::ErrorGeneral,
        CvStatus::ErrorUnimplemented,
        CvStatus::ErrorMemory,
        CvStatus::ErrorEffect,
        CvStatus::ErrorSelector,
        CvStatus::ErrorBuffer,
        CvStatus::ErrorParameter,
        CvStatus::ErrorMismatch,
        CvStatus::ErrorPixelFormat,
        CvStatus::ErrorModel,
        CvStatus::ErrorLibrary,
        CvStatus::ErrorInitialization,
        CvStatus::ErrorFile,
        CvStatus::ErrorFeatureNotFound,
        CvStatus::ErrorMissingInput,
        CvStatus::ErrorResolution,
        CvStatus::ErrorCudaMemory,
        CvStatus::ErrorCudaValue,
        CvStatus::ErrorCudaPitch,
        CvStatus::ErrorCudaInit,
        CvStatus::ErrorCudaLaunch,
        CvStatus::ErrorCudaKernel,
        CvStatus::ErrorCudaDriver,
        CvStatus::ErrorCudaUnsupported,
        CvStatus::ErrorCudaIllegalAddress,
        CvStatus::ErrorCuda,
    ];

    /// Get the fixed description for this status code.
    pub fn description(self) -> &'static str {
        match self {
            CvStatus::Success => "The procedure returned successfully.",
            CvStatus::ErrorGeneral => "An otherwise unspecified error has occurred.",
            CvStatus::ErrorUnimplemented => "The requested feature is not yet implemented.",
            CvStatus::ErrorMemory => "There is not enough memory for the requested operation.",
            CvStatus::ErrorEffect => "An invalid effect handle has been supplied.",
            CvStatus::ErrorSelector => {
                "The given parameter selector is not valid in this effect filter."
            }
            CvStatus::ErrorBuffer => "An image buffer has not been specified.",
            CvStatus::ErrorParameter => {
                "An invalid parameter value has been supplied for this effect and selector."
            }
            CvStatus::ErrorMismatch => "Some parameters are not appropriately matched.",
            CvStatus::ErrorPixelFormat => "The specified pixel format is not accommodated.",
            CvStatus::ErrorModel => "The inference model could not be loaded.",
            CvStatus::ErrorLibrary => "The dynamic library could not be loaded.",
            CvStatus::ErrorInitialization => "The effect has not been properly initialized.",
            CvStatus::ErrorFile => "The file could not be found.",
            CvStatus::ErrorFeatureNotFound => "The requested feature was not found.",
            CvStatus::ErrorMissingInput => "A required input parameter was not set.",
            CvStatus::ErrorResolution => "The specified image resolution is not supported.",
            CvStatus::ErrorCudaMemory => {
                "There is not enough CUDA memory for the requested operation."
            }
            CvStatus::ErrorCudaValue => "A CUDA parameter is not within the acceptable range.",
            CvStatus::ErrorCudaPitch => "A CUDA pitch is not within the acceptable range.",
            CvStatus::ErrorCudaInit => "The CUDA driver and runtime could not be initialized.",
            CvStatus::ErrorCudaLaunch => "The CUDA kernel launch has failed.",
            CvStatus::ErrorCudaKernel => "No suitable kernel image is available for the device.",
            CvStatus::ErrorCudaDriver => {
                "The installed CUDA driver is older than the CUDA runtime library."
            }
            CvStatus::ErrorCudaUnsupported => {
                "The CUDA operation is not supported on the current system or device."
            }
            CvStatus::ErrorCudaIllegalAddress => {
                "CUDA tried to load or store on an invalid memory address."
            }
            CvStatus::ErrorCuda => "An otherwise unspecified CUDA error has been reported.",
        }
    }

    /// Convert a raw integer into a declared status code.
    pub fn from_raw(code: i32) -> Option<CvStatus> {
        match code {
            0 => Some(CvStatus::Success),
            -1 => Some(CvStatus::ErrorGeneral),
            -2 => Some(CvStatus::ErrorUnimplemented),
            -3 => Some(CvStatus::ErrorMemory),
            -4 => Some(CvStatus::ErrorEffect),
            -5 => Some(CvStatus::ErrorSelector),
            -6 => Some(CvStatus::ErrorBuffer),
            -7 => Some(CvStatus::ErrorParameter),
            -8 => Some(CvStatus::ErrorMismatch),
            -9 => Some(CvStatus::ErrorPixelFormat),
            -10 => Some(CvStatus::ErrorModel),
            -11 => Some(CvStatus::ErrorLibrary),
            -12 => Some(CvStatus::ErrorInitialization),
            -13 => Some(CvStatus::ErrorFile),
            -14 => Some(CvStatus::ErrorFeatureNotFound),
            -15 => Some(CvStatus::ErrorMissingInput),
            -16 => Some(CvStatus::ErrorResolution),
            -20 => Some(CvStatus::ErrorCudaMemory),
            -21 => Some(CvStatus::ErrorCudaValue),
            -22 => Some(CvStatus::ErrorCudaPitch),
            -23 => Some(CvStatus::ErrorCudaInit),
            -24 => Some(CvStatus::ErrorCudaLaunch),
            -25 => Some(CvStatus::ErrorCudaKernel),
            -26 => Some(CvStatus::ErrorCudaDriver),
            -27 => Some(CvStatus::ErrorCudaUnsupported),
            -28 => Some(CvStatus::ErrorCudaIllegalAddress),
            -30 => Some(CvStatus::ErrorCuda),
            _ => None,
        }
    }

    /// Get the description for an arbitrary raw code.
    ///
    /// Total over all integers: undeclared codes map to a fixed fallback
    /// message rather than failing, so callers never see a missing message.
    pub fn error_string(code: i32) -> &'static str {
        match CvStatus::from_raw(code) {
            Some(status) => status.description(),
            None => UNRECOGNIZED,
        }
    }

    pub fn is_success(self) -> bool {
        self == CvStatus::Success
    }

    /// Whether this code belongs to the CUDA subsystem range.
    pub fn is_cuda(self) -> bool {
        (self as i32) <= CUDA_RANGE_START
    }
}

impl fmt::Display for CvStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
