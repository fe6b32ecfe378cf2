mod error;
mod result;

pub use error::Error;
pub use result::Result;
