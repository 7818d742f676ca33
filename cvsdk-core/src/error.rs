use thiserror::Error;

use crate::{CvResult, CvStatus};

/// Error carrying a raw status code and its fixed description.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("CV SDK error: {1} (code {0})")]
pub struct CvError(pub i32, pub &'static str);

impl CvError {
    pub fn from_status(status: CvStatus) -> Self {
        CvError(status as i32, status.description())
    }

    /// Build an error from a raw code, valid or not.
    pub fn from_raw(code: i32) -> Self {
        CvError(code, CvStatus::error_string(code))
    }
}

impl From<CvStatus> for CvError {
    fn from(status: CvStatus) -> Self {
        CvError::from_status(status)
    }
}

#[inline]
pub fn check(status: CvStatus) -> CvResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(CvError::from_status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_passes_success_through() {
        assert_eq!(check(CvStatus::Success), Ok(()));
    }

    #[test]
    fn check_carries_code_and_message() {
        let err = check(CvStatus::ErrorCudaInit).unwrap_err();
        assert_eq!(err.0, CvStatus::ErrorCudaInit as i32);
        assert_eq!(err.1, CvStatus::ErrorCudaInit.description());
    }

    #[test]
    fn error_display_includes_the_code() {
        let err = CvError::from_status(CvStatus::ErrorFile);
        let text = err.to_string();
        assert!(text.contains("-13"));
        assert!(text.contains("could not be found"));
    }

    #[test]
    fn from_raw_accepts_undeclared_codes() {
        let err = CvError::from_raw(9999);
        assert_eq!(err.0, 9999);
        assert!(!err.1.is_empty());
    }
}
