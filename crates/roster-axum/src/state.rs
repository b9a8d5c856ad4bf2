//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `AxumContext`, so cloning it per request is cheap.
pub type AppState = Arc<AxumContext>;
