use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::membership::constructionerror::ConstructionError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("'{name}' rejected: {source}")]
    ConstructionError {
        name: String,
        #[source]
        source: ConstructionError
    },

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("key '{0}' already registered")]
    DuplicateNameError(String)
}

impl ManagerError {
    pub fn construction(name: &str, source: ConstructionError) -> ManagerError {
        ManagerError::ConstructionError { name: name.to_owned(), source }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: DeserializeOwned {
    Ok(serde_json::from_value(json_value)?)
}
