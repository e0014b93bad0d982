//! Action model for the low-code builder.
//!
//! An action is a unit of work tagged by an [`ActionType`] and carrying a
//! payload whose shape depends on that tag. Raw records coming from the
//! builder are narrowed into the [`Action`] sum type exactly once, so the
//! rest of the crate matches on variants instead of probing JSON fields.

pub mod discriminator;
pub mod drive;
pub mod s3;

pub use discriminator::{client_s3_action_content, drive_action_content};
pub use drive::{DriveActionContent, DriveOperation};
pub use s3::{S3ActionContent, S3Command};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The discriminant of an action.
///
/// Tags the builder does not know about are kept verbatim in
/// [`ActionType::Other`] instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    /// AI agent invocation, billed against the token quota
    AiAgent,
    /// Managed drive file operations
    IllaDrive,
    /// Amazon S3 compatible object storage
    S3,
    /// REST API request
    RestApi,
    /// GraphQL request
    GraphQl,
    /// MySQL query
    MySql,
    /// PostgreSQL query
    PostgreSql,
    /// MongoDB query
    MongoDb,
    /// Redis command
    Redis,
    /// Outgoing mail
    Smtp,
    /// Client-side JavaScript transformer
    Transformer,
    /// Any other resource kind
    Other(String),
}

impl ActionType {
    /// Returns the wire tag of this action type.
    pub fn as_str(&self) -> &str {
        match self {
            ActionType::AiAgent => "aiagent",
            ActionType::IllaDrive => "illadrive",
            ActionType::S3 => "s3",
            ActionType::RestApi => "restapi",
            ActionType::GraphQl => "graphql",
            ActionType::MySql => "mysql",
            ActionType::PostgreSql => "postgresql",
            ActionType::MongoDb => "mongodb",
            ActionType::Redis => "redis",
            ActionType::Smtp => "smtp",
            ActionType::Transformer => "transformer",
            ActionType::Other(tag) => tag,
        }
    }
}

impl From<&str> for ActionType {
    fn from(tag: &str) -> Self {
        match tag {
            "aiagent" => ActionType::AiAgent,
            "illadrive" => ActionType::IllaDrive,
            "s3" => ActionType::S3,
            "restapi" => ActionType::RestApi,
            "graphql" => ActionType::GraphQl,
            "mysql" => ActionType::MySql,
            "postgresql" => ActionType::PostgreSql,
            "mongodb" => ActionType::MongoDb,
            "redis" => ActionType::Redis,
            "smtp" => ActionType::Smtp,
            "transformer" => ActionType::Transformer,
            other => ActionType::Other(other.to_string()),
        }
    }
}

impl From<String> for ActionType {
    fn from(tag: String) -> Self {
        ActionType::from(tag.as_str())
    }
}

impl From<ActionType> for String {
    fn from(action_type: ActionType) -> Self {
        action_type.as_str().to_string()
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action record as the builder stores it, before narrowing.
///
/// Fields other than `actionType` and `content` (display name, resource id,
/// trigger mode, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAction {
    /// The action's discriminant
    pub action_type: ActionType,
    /// The untyped payload
    #[serde(default)]
    pub content: Value,
}

/// An action narrowed by its type tag.
///
/// Content that does not match the shape its tag requires lands in
/// [`Action::Other`] together with the original tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawAction")]
pub enum Action {
    /// An AI agent action; its payload is never inspected.
    AiAgent(Value),
    /// A drive action with a recognized operation.
    Drive(DriveActionContent),
    /// An S3 action with a recognized command.
    S3(S3ActionContent),
    /// Everything else, including tagged actions with malformed content.
    Other {
        /// The original tag
        action_type: ActionType,
        /// The original payload
        content: Value,
    },
}

impl Action {
    /// Narrows a raw tag and payload into an action.
    pub fn from_parts(action_type: ActionType, content: Value) -> Self {
        match action_type {
            ActionType::AiAgent => Action::AiAgent(content),
            ActionType::IllaDrive => match drive_action_content(&action_type, &content) {
                Some(drive) => Action::Drive(drive),
                None => Action::Other {
                    action_type,
                    content,
                },
            },
            ActionType::S3 => match S3ActionContent::from_value(&content) {
                Some(s3) => Action::S3(s3),
                None => Action::Other {
                    action_type,
                    content,
                },
            },
            _ => Action::Other {
                action_type,
                content,
            },
        }
    }

    /// Returns the type tag this action was built from.
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::AiAgent(_) => ActionType::AiAgent,
            Action::Drive(_) => ActionType::IllaDrive,
            Action::S3(_) => ActionType::S3,
            Action::Other { action_type, .. } => action_type.clone(),
        }
    }
}

impl From<RawAction> for Action {
    fn from(raw: RawAction) -> Self {
        Action::from_parts(raw.action_type, raw.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_type_known_tags() {
        assert_eq!(ActionType::from("aiagent"), ActionType::AiAgent);
        assert_eq!(ActionType::from("illadrive"), ActionType::IllaDrive);
        assert_eq!(ActionType::from("s3"), ActionType::S3);
        assert_eq!(ActionType::from("restapi"), ActionType::RestApi);
    }

    #[test]
    fn test_action_type_unknown_tag_is_preserved() {
        let action_type = ActionType::from("snowflake");
        assert_eq!(action_type, ActionType::Other("snowflake".to_string()));
        assert_eq!(action_type.as_str(), "snowflake");
        assert_eq!(action_type.to_string(), "snowflake");
    }

    #[test]
    fn test_action_type_tags_are_case_sensitive() {
        assert_eq!(
            ActionType::from("AIAGENT"),
            ActionType::Other("AIAGENT".to_string())
        );
    }

    #[test]
    fn test_action_type_serde() {
        let parsed: ActionType = serde_json::from_value(json!("illadrive")).unwrap();
        assert_eq!(parsed, ActionType::IllaDrive);
        assert_eq!(
            serde_json::to_value(ActionType::GraphQl).unwrap(),
            json!("graphql")
        );
    }

    #[test]
    fn test_from_parts_ai_agent_keeps_any_content() {
        let action = Action::from_parts(ActionType::AiAgent, json!({"virtualResource": {}}));
        assert!(matches!(action, Action::AiAgent(_)));

        let action = Action::from_parts(ActionType::AiAgent, Value::Null);
        assert!(matches!(action, Action::AiAgent(Value::Null)));
    }

    #[test]
    fn test_from_parts_drive() {
        let action = Action::from_parts(ActionType::IllaDrive, json!({"operation": "upload"}));
        match action {
            Action::Drive(content) => assert_eq!(content.operation, DriveOperation::Upload),
            other => panic!("Expected drive action, got {:?}", other),
        }
    }

    #[test]
    fn test_from_parts_drive_with_malformed_content() {
        let action = Action::from_parts(ActionType::IllaDrive, json!({}));
        assert!(matches!(
            action,
            Action::Other {
                action_type: ActionType::IllaDrive,
                ..
            }
        ));

        let action = Action::from_parts(ActionType::IllaDrive, json!({"operation": "DELETE"}));
        assert!(matches!(action, Action::Other { .. }));
        assert_eq!(action.action_type(), ActionType::IllaDrive);
    }

    #[test]
    fn test_from_parts_s3() {
        let action = Action::from_parts(ActionType::S3, json!({"commands": "list"}));
        assert!(matches!(action, Action::S3(_)));
    }

    #[test]
    fn test_from_parts_other_type() {
        let content = json!({"url": "https://example.com", "method": "GET"});
        let action = Action::from_parts(ActionType::RestApi, content.clone());
        assert_eq!(
            action,
            Action::Other {
                action_type: ActionType::RestApi,
                content,
            }
        );
    }

    #[test]
    fn test_deserialize_action_record() {
        let action: Action = serde_json::from_value(json!({
            "displayName": "uploadAvatar",
            "actionType": "illadrive",
            "triggerMode": "manually",
            "content": {"operation": "uploadMultiple", "fileNames": []}
        }))
        .unwrap();

        match action {
            Action::Drive(content) => {
                assert_eq!(content.operation, DriveOperation::UploadMultiple);
                assert!(content.fields.contains_key("fileNames"));
            }
            other => panic!("Expected drive action, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_action_record_without_content() {
        let action: Action = serde_json::from_value(json!({"actionType": "aiagent"})).unwrap();
        assert_eq!(action, Action::AiAgent(Value::Null));
    }

    #[test]
    fn test_deserialize_action_record_requires_type() {
        let result = serde_json::from_value::<Action>(json!({"content": {}}));
        assert!(result.is_err());
    }
}
