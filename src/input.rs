//! Reading action and error documents from disk.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::action::Action;
use crate::error::{PaywallError, RuntimeError};

/// Reads and deserializes a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PaywallError> {
    let text = fs::read_to_string(path).map_err(|source| PaywallError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Reads an action record.
pub fn read_action(path: &Path) -> Result<Action, PaywallError> {
    read_json(path)
}

/// Reads an error value. Any JSON document is accepted.
pub fn read_error(path: &Path) -> Result<RuntimeError, PaywallError> {
    read_json(path)
}
