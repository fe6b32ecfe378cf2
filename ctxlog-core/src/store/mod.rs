//! Associates an [`Entry`] with a [`Context`].
//!
//! The entry lives in the context chain under a private key, so it follows
//! the context wherever it is passed:
//!
//! ```
//! use ctxlog_core::{store, Context};
//!
//! let ctx = store::with_field(&Context::background(), "user", "alice");
//! // ...
//! store::with(&ctx).info("user did something"); // carries user="alice"
//! ```

mod provider;

pub use provider::{default_entry, reset_default_provider, set_default_provider};

use crate::context::{Context, Key};
use crate::entry::{Entry, Fields};
use crate::types::Result;
use serde::Serialize;
use serde_json::Value;

/// Field name used by [`with_request_id`].
pub const REQUEST_ID: &str = "request_id";

/// What a context holds under [`EntryKey`]. `Cleared` is stored explicitly so
/// that a clear shadows entries set further up the chain.
enum Slot {
    Cleared,
    Present(Entry),
}

struct EntryKey;

impl Key for EntryKey {
    type Value = Slot;
}

/// The entry stored in `ctx`, or a fresh [`default_entry`] if none was set
/// or it was cleared.
pub fn with(ctx: &Context) -> Entry {
    match ctx.value::<EntryKey>() {
        Some(Slot::Present(entry)) => entry.clone(),
        Some(Slot::Cleared) | None => default_entry(),
    }
}

/// Add a single field to the entry stored in `ctx`.
pub fn with_field(ctx: &Context, name: impl Into<String>, value: impl Into<Value>) -> Context {
    set(ctx, with(ctx).with_field(name, value))
}

/// Add `fields` to the entry stored in `ctx`.
pub fn with_fields<I, K, V>(ctx: &Context, fields: I) -> Context
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    set(ctx, with(ctx).with_fields(fields))
}

/// Add the top-level members of a serializable struct or map as fields.
pub fn with_serialized<T: Serialize + ?Sized>(ctx: &Context, value: &T) -> Result<Context> {
    Ok(set(ctx, with(ctx).with_serialized(value)?))
}

/// Tag `ctx` with a freshly generated `request_id`.
pub fn with_request_id(ctx: &Context) -> Context {
    with_field(ctx, REQUEST_ID, uuid::Uuid::new_v4().to_string())
}

/// Fields currently stored in `ctx`.
pub fn fields(ctx: &Context) -> Fields {
    with(ctx).into_data()
}

/// Unset the entry stored in `ctx`.
///
/// Contexts are append-only, so the previous entry is not freed: it stays
/// reachable through the returned context's ancestors until the whole chain
/// is dropped. The returned context does make [`with`] return a fresh entry.
pub fn clear(ctx: &Context) -> Context {
    ctx.with_value::<EntryKey>(Slot::Cleared)
}

/// Make `entry` the current entry for `ctx` and its descendants.
///
/// [`with_field`] and [`with_fields`] are usually enough; this is for entries
/// that differ in more than their fields, such as a different logger.
pub fn set(ctx: &Context, entry: Entry) -> Context {
    ctx.with_value::<EntryKey>(Slot::Present(entry))
}

/// Shorthand for [`with`] on [`Context::current`].
pub fn current() -> Entry {
    with(&Context::current())
}
