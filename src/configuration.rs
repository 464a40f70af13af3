use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::manager::manager::IManager;
use crate::manager::managererror::ManagerError;
use crate::membership::membershipfunctionmanager::{
    MembershipFunctionManager,
    membership_function_manager_builder
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    membership_functions: Vec<serde_json::Value>
}

/// Everything loaded from one configuration file.
///
/// ```json
/// {
///     "membership_functions": [
///         {"name": "cold", "function_type": "Triangle", "a": 0.0, "b": 0.0, "c": 10.0}
///     ]
/// }
/// ```
#[derive(Clone, Default)]
pub struct Configuration {
    membership_function_manager: MembershipFunctionManager
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn membership_function_manager(&self) -> &MembershipFunctionManager {
        &self.membership_function_manager
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        let mut membership_function_builder = membership_function_manager_builder();
        membership_function_builder.insert_obj_from_json_vec(&json_prop.membership_functions)?;
        Ok(Configuration {
            membership_function_manager: membership_function_builder.build()
        })
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ManagerError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let configuration = Configuration::from_json_value(json_value)?;
        info!(
            path = %file_path.display(),
            membership_functions = configuration.membership_function_manager.len(),
            "configuration loaded"
        );
        Ok(configuration)
    }
}
