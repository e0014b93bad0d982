//! Upgrade prompt routing.
//!
//! Decides whether a failed action should interrupt the user with an
//! upgrade prompt, and which quota the prompt is about. The decision
//! ([`classify`]) is pure; [`classify_and_route`] and [`UpgradeRouter`]
//! forward the decision to an [`UpgradeDispatcher`].

pub mod classifier;
pub mod dispatcher;
pub mod router;

pub use classifier::{classify, classify_and_route};
pub use dispatcher::{DispatchRecord, RecordingDispatcher, TracingDispatcher, UpgradeDispatcher};
pub use router::{RouteOutcome, UpgradeRouter};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The quota an upgrade prompt is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UpgradeCategory {
    /// AI usage tokens
    Token,
    /// Drive download bandwidth
    Traffic,
    /// Drive storage space
    Storage,
}

impl UpgradeCategory {
    /// Returns the category tag understood by the prompt dispatcher.
    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeCategory::Token => "TOKEN",
            UpgradeCategory::Traffic => "TRAFFIC",
            UpgradeCategory::Storage => "STORAGE",
        }
    }
}

impl fmt::Display for UpgradeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of classifying a failed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The failure should raise an upgrade prompt of this category.
    Prompt(UpgradeCategory),
    /// The failure is left to the caller's default error handling.
    Unclassified,
}

impl Classification {
    /// Returns the prompt category, if any.
    pub fn category(&self) -> Option<UpgradeCategory> {
        match self {
            Classification::Prompt(category) => Some(*category),
            Classification::Unclassified => None,
        }
    }

    /// Returns true if no prompt applies.
    pub fn is_unclassified(&self) -> bool {
        matches!(self, Classification::Unclassified)
    }
}
