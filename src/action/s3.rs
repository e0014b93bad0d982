//! S3 action content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Commands supported by S3 actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum S3Command {
    /// List objects under a prefix
    List,
    /// Read an object's body
    ReadOne,
    /// Download an object
    DownloadOne,
    /// Delete an object
    DeleteOne,
    /// Delete several objects
    DeleteMultiple,
    /// Upload an object
    Upload,
    /// Upload several objects
    UploadMultiple,
}

impl S3Command {
    /// Every S3 command, in declaration order.
    pub const ALL: [S3Command; 7] = [
        S3Command::List,
        S3Command::ReadOne,
        S3Command::DownloadOne,
        S3Command::DeleteOne,
        S3Command::DeleteMultiple,
        S3Command::Upload,
        S3Command::UploadMultiple,
    ];

    /// Commands the browser runs itself against a presigned URL.
    pub const CLIENT_SIDE: [S3Command; 4] = [
        S3Command::ReadOne,
        S3Command::DownloadOne,
        S3Command::Upload,
        S3Command::UploadMultiple,
    ];

    /// Returns the wire name of this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            S3Command::List => "list",
            S3Command::ReadOne => "readOne",
            S3Command::DownloadOne => "downloadOne",
            S3Command::DeleteOne => "deleteOne",
            S3Command::DeleteMultiple => "deleteMultiple",
            S3Command::Upload => "upload",
            S3Command::UploadMultiple => "uploadMultiple",
        }
    }

    /// Parses a wire name. Matching is case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.as_str() == name)
    }

    /// Returns true if the command is executed client-side.
    pub fn is_client_side(&self) -> bool {
        Self::CLIENT_SIDE.contains(self)
    }
}

/// Content of an `s3` action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3ActionContent {
    /// The requested command
    pub commands: S3Command,
    /// Command-specific arguments (bucket, object key, ...)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl S3ActionContent {
    /// Reads S3 content out of an untyped payload.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let commands = S3Command::parse(object.get("commands")?.as_str()?)?;
        let mut fields = object.clone();
        fields.remove("commands");
        Some(Self { commands, fields })
    }
}
