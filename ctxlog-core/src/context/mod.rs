mod core;
mod scope;

pub use self::core::{Context, Key};
