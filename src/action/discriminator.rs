//! Content shape discriminators.
//!
//! These narrow an untyped payload using its claimed type tag. They never
//! fail: a wrong tag, a missing field or an unknown value all yield `None`.

use serde_json::Value;

use super::{ActionType, DriveActionContent, S3ActionContent};

/// Narrows `content` to drive content if `action_type` is `illadrive` and the
/// payload carries a known drive `operation`.
pub fn drive_action_content(
    action_type: &ActionType,
    content: &Value,
) -> Option<DriveActionContent> {
    if *action_type != ActionType::IllaDrive {
        return None;
    }
    DriveActionContent::from_value(content)
}

/// Narrows `content` to S3 content if `action_type` is `s3` and the payload
/// carries a command the browser executes itself.
pub fn client_s3_action_content(
    action_type: &ActionType,
    content: &Value,
) -> Option<S3ActionContent> {
    if *action_type != ActionType::S3 {
        return None;
    }
    S3ActionContent::from_value(content).filter(|s3| s3.commands.is_client_side())
}
