//! Process-wide default theme
//!
//! The default theme is built once on first access and shared read-only by
//! every consumer. Derived themes are independent values, never written back
//! here.

use std::sync::{Arc, OnceLock};

use crate::theme::Theme;

/// Global default theme instance
static DEFAULT_THEME: OnceLock<Arc<Theme>> = OnceLock::new();

/// Shared handle to the default theme
pub fn default_theme() -> Arc<Theme> {
    DEFAULT_THEME
        .get_or_init(|| {
            tracing::debug!("initializing default theme");
            Arc::new(Theme::default())
        })
        .clone()
}
