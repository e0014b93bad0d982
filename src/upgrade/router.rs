//! Configuration-aware routing of failed actions.

use serde::Serialize;
use tracing::{debug, info};

use super::{classify, UpgradeCategory, UpgradeDispatcher};
use crate::action::Action;
use crate::config::RouterConfig;
use crate::error::RuntimeError;

/// What happened to a routed failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "category", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// The dispatcher was called with this category.
    Dispatched(UpgradeCategory),
    /// A prompt applied but the configuration suppressed it.
    Suppressed(UpgradeCategory),
    /// No prompt applies; the caller's default handling should run.
    Unclassified,
}

impl RouteOutcome {
    /// Returns true if the dispatcher was called.
    pub fn is_dispatched(&self) -> bool {
        matches!(self, RouteOutcome::Dispatched(_))
    }

    /// Returns true if the caller should fall back to its own error display.
    pub fn needs_default_handling(&self) -> bool {
        !self.is_dispatched()
    }
}

/// Routes action failures to a dispatcher, honoring a [`RouterConfig`].
#[derive(Debug)]
pub struct UpgradeRouter<D> {
    dispatcher: D,
    config: RouterConfig,
}

impl<D: UpgradeDispatcher> UpgradeRouter<D> {
    /// Creates a router with the default configuration.
    pub fn new(dispatcher: D) -> Self {
        Self::with_config(dispatcher, RouterConfig::default())
    }

    /// Creates a router with an explicit configuration.
    pub fn with_config(dispatcher: D, config: RouterConfig) -> Self {
        Self { dispatcher, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Returns the wrapped dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Routes one failure.
    pub fn route(&self, action: &Action, error: &RuntimeError) -> RouteOutcome {
        let Some(category) = classify(action).category() else {
            debug!(action_type = %action.action_type(), "No upgrade prompt applies");
            return RouteOutcome::Unclassified;
        };

        if !self.config.allows(category) {
            info!(
                action_type = %action.action_type(),
                category = %category,
                "Upgrade prompt suppressed by configuration"
            );
            return RouteOutcome::Suppressed(category);
        }

        debug!(
            action_type = %action.action_type(),
            category = %category,
            "Routing action failure to upgrade prompt"
        );
        self.dispatcher.dispatch(error, category);
        RouteOutcome::Dispatched(category)
    }
}
