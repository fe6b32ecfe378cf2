//! Request-scoped structured logging fields carried on an immutable context.
//!
//! Fields attached to a [`Context`] early in request handling are picked up
//! by every entry resolved from that context (or any context derived from
//! it) further down the call chain, without threading them through every
//! function signature.

pub mod context;
pub mod entry;
pub mod store;
pub mod types;

pub mod prelude {
    //! Convenient re-exports of commonly used types
    pub use crate::context::{Context, Key};
    pub use crate::entry::{Entry, Fields, Logger, LoggerBuilder, LoggerConfig, Rendered};
    pub use crate::store::{
        clear, current, default_entry, fields, reset_default_provider, set,
        set_default_provider, with, with_field, with_fields, with_request_id, with_serialized,
        REQUEST_ID,
    };
    pub use crate::types::{Error, Result};
}

// Re-export main types
pub use prelude::*;
