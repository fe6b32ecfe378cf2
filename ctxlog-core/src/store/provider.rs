use crate::entry::Entry;
use arc_swap::ArcSwapOption;
use std::sync::Arc;

struct Provider(Box<dyn Fn() -> Entry + Send + Sync>);

static PROVIDER: ArcSwapOption<Provider> = ArcSwapOption::const_empty();

/// Install the function that produces the entry returned for contexts
/// with no entry of their own. Replaces any previously installed provider.
pub fn set_default_provider<F>(provider: F)
where
    F: Fn() -> Entry + Send + Sync + 'static,
{
    PROVIDER.store(Some(Arc::new(Provider(Box::new(provider)))));
}

/// Go back to [`Entry::standard`] as the default entry.
pub fn reset_default_provider() {
    PROVIDER.store(None);
}

/// A fresh default entry from the installed provider.
pub fn default_entry() -> Entry {
    let provider = PROVIDER.load();
    match &*provider {
        Some(provider) => (provider.0)(),
        None => Entry::standard(),
    }
}
