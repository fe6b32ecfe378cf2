//! ctxlog attaches structured logging fields to a request-scoped context.
//!
//! ```
//! use ctxlog::prelude::*;
//!
//! fn handle(ctx: &Context) {
//!     let ctx = ctxlog::with_field(ctx, "user", "alice");
//!     charge(&ctx);
//! }
//!
//! fn charge(ctx: &Context) {
//!     // carries request_id and user
//!     ctxlog::with(ctx).info("charging card");
//! }
//!
//! let ctx = ctxlog::with_request_id(&Context::background());
//! handle(&ctx);
//! ```

pub use ctxlog_core::{context, entry, store, types};

pub mod prelude {
    //! Convenient re-exports of commonly used types
    pub use ctxlog_core::prelude::*;
    pub use serde_json::{json, Value};
    pub use tracing::Level;
}

// Re-export main types
pub use prelude::*;
