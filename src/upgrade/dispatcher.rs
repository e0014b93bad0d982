//! Upgrade prompt dispatchers.
//!
//! The dispatcher is the host's modal system: it renders the prompt, dedups
//! repeated prompts and reports analytics. This crate only defines the seam
//! and two implementations, one that logs and one that records.

use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use super::UpgradeCategory;
use crate::error::RuntimeError;

/// Receives failures that should raise an upgrade prompt.
///
/// Dispatchers are shared across threads, so implementations must be
/// `Send + Sync`.
pub trait UpgradeDispatcher: Send + Sync {
    /// Shows (or queues) an upgrade prompt of `category` for `error`.
    fn dispatch(&self, error: &RuntimeError, category: UpgradeCategory);
}

impl<F> UpgradeDispatcher for F
where
    F: Fn(&RuntimeError, UpgradeCategory) + Send + Sync,
{
    fn dispatch(&self, error: &RuntimeError, category: UpgradeCategory) {
        self(error, category)
    }
}

/// Dispatcher that reports prompts through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDispatcher;

impl UpgradeDispatcher for TracingDispatcher {
    fn dispatch(&self, error: &RuntimeError, category: UpgradeCategory) {
        match error.api_error() {
            Some(api) => warn!(
                category = %category,
                error_code = %api.error_code,
                "Upgrade required: {}",
                api.error_message
            ),
            None => warn!(category = %category, "Upgrade required"),
        }
    }
}

/// One recorded dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRecord {
    /// The prompt category
    pub category: UpgradeCategory,
    /// The forwarded error
    pub error: RuntimeError,
}

/// Dispatcher that keeps every call in memory, in call order.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    records: Mutex<Vec<DispatchRecord>>,
}

impl RecordingDispatcher {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DispatchRecord>> {
        // Pushes are the only mutation, so a poisoned Vec is still consistent.
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns a copy of all records.
    pub fn records(&self) -> Vec<DispatchRecord> {
        self.lock().clone()
    }

    /// Returns the categories dispatched so far.
    pub fn categories(&self) -> Vec<UpgradeCategory> {
        self.lock().iter().map(|record| record.category).collect()
    }

    /// Returns the number of dispatches.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns all records.
    pub fn take(&self) -> Vec<DispatchRecord> {
        std::mem::take(&mut *self.lock())
    }
}

impl UpgradeDispatcher for RecordingDispatcher {
    fn dispatch(&self, error: &RuntimeError, category: UpgradeCategory) {
        self.lock().push(DispatchRecord {
            category,
            error: error.clone(),
        });
    }
}
