//! Maps failed actions to upgrade categories.

use tracing::debug;

use super::{Classification, UpgradeCategory, UpgradeDispatcher};
use crate::action::Action;
use crate::error::RuntimeError;

/// Decides which upgrade prompt, if any, a failure of `action` warrants.
///
/// Rules, first match wins:
/// - any AI agent failure is a token quota candidate
/// - drive downloads map to traffic, drive uploads to storage
/// - everything else, including other drive operations and drive actions
///   with malformed content, is unclassified
pub fn classify(action: &Action) -> Classification {
    match action {
        Action::AiAgent(_) => Classification::Prompt(UpgradeCategory::Token),
        Action::Drive(content) if content.operation.is_download() => {
            Classification::Prompt(UpgradeCategory::Traffic)
        }
        Action::Drive(content) if content.operation.is_upload() => {
            Classification::Prompt(UpgradeCategory::Storage)
        }
        Action::Drive(_) | Action::S3(_) | Action::Other { .. } => Classification::Unclassified,
    }
}

/// Classifies a failed action and hands the error to `dispatcher` when a
/// prompt applies.
///
/// The dispatcher is called exactly once for a [`Classification::Prompt`]
/// and never for [`Classification::Unclassified`]. Nothing is cached between
/// calls.
pub fn classify_and_route<D>(
    action: &Action,
    error: &RuntimeError,
    dispatcher: &D,
) -> Classification
where
    D: UpgradeDispatcher + ?Sized,
{
    let classification = classify(action);
    match classification {
        Classification::Prompt(category) => {
            debug!(
                action_type = %action.action_type(),
                category = %category,
                "Routing action failure to upgrade prompt"
            );
            dispatcher.dispatch(error, category);
        }
        Classification::Unclassified => {
            debug!(
                action_type = %action.action_type(),
                "Action failure left to default error handling"
            );
        }
    }
    classification
}
