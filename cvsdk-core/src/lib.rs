//! Status codes and error model for the CV SDK.
//!
//! The registry is a closed set of integer codes fixed at build time plus a
//! total, read-only mapping from code to descriptive text. Everything here is
//! immutable static data, safe to read from any thread.

mod error;
mod result;
mod status;

pub use error::{check, CvError};
pub use result::CvResult;
pub use status::CvStatus;
