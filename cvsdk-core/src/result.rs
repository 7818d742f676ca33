use crate::CvError;

pub type CvResult<T> = core::result::Result<T, CvError>;
