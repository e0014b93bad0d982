//! Drive action content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Operations supported by the managed drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DriveOperation {
    /// List files in a folder
    List,
    /// Upload a single file
    Upload,
    /// Upload several files at once
    UploadMultiple,
    /// Download a single file
    DownloadOne,
    /// Download several files as an archive
    DownloadMultiple,
    /// Delete a single file
    DeleteOne,
    /// Delete several files
    DeleteMultiple,
    /// Rename or move a file
    Update,
}

impl DriveOperation {
    /// Every drive operation, in declaration order.
    pub const ALL: [DriveOperation; 8] = [
        DriveOperation::List,
        DriveOperation::Upload,
        DriveOperation::UploadMultiple,
        DriveOperation::DownloadOne,
        DriveOperation::DownloadMultiple,
        DriveOperation::DeleteOne,
        DriveOperation::DeleteMultiple,
        DriveOperation::Update,
    ];

    /// Returns the wire name of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveOperation::List => "list",
            DriveOperation::Upload => "upload",
            DriveOperation::UploadMultiple => "uploadMultiple",
            DriveOperation::DownloadOne => "downloadOne",
            DriveOperation::DownloadMultiple => "downloadMultiple",
            DriveOperation::DeleteOne => "deleteOne",
            DriveOperation::DeleteMultiple => "deleteMultiple",
            DriveOperation::Update => "update",
        }
    }

    /// Parses a wire name. Matching is case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// Returns true if the operation consumes download traffic.
    pub fn is_download(&self) -> bool {
        matches!(
            self,
            DriveOperation::DownloadOne | DriveOperation::DownloadMultiple
        )
    }

    /// Returns true if the operation consumes storage.
    pub fn is_upload(&self) -> bool {
        matches!(self, DriveOperation::Upload | DriveOperation::UploadMultiple)
    }
}

impl fmt::Display for DriveOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of an `illadrive` action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveActionContent {
    /// The requested drive operation
    pub operation: DriveOperation,
    /// Operation-specific fields (file ids, folder, expiry, ...)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DriveActionContent {
    /// Creates content for the given operation with no extra fields.
    pub fn new(operation: DriveOperation) -> Self {
        Self {
            operation,
            fields: Map::new(),
        }
    }

    /// Reads drive content out of an untyped payload.
    ///
    /// Returns `None` unless the payload is an object whose `operation` is a
    /// known drive operation.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let operation = DriveOperation::parse(object.get("operation")?.as_str()?)?;
        let mut fields = object.clone();
        fields.remove("operation");
        Some(Self { operation, fields })
    }
}
