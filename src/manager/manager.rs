use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info, warn};

use super::managererror::{ManagerError, parse_json_value};
use super::namedobject::NamedJsonObject;

pub type ObjectFromJson<V> = fn(&str, serde_json::Value) -> Result<V, ManagerError>;

pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> &HashMap<String, V>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    /// Registered names in ascending order.
    fn names<'a>(&'a self) -> Vec<&'a str> where
        V: 'a {
        let mut names: Vec<&'a str> = self.map().keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn len(&self) -> usize {
        self.map().len()
    }

    fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ManagerBuilder
// ─────────────────────────────────────────────────────────────────────────────

pub struct ManagerBuilder<V> {
    map: HashMap<String, V>,
    get_obj_from_json: ObjectFromJson<V>
}

impl <V> ManagerBuilder<V> where
    V: Clone {
    pub fn new(get_obj_from_json: ObjectFromJson<V>) -> ManagerBuilder<V> {
        ManagerBuilder { map: HashMap::new(), get_obj_from_json }
    }

    pub fn insert(&mut self, name: &str, obj: V) -> Result<(), ManagerError> {
        if self.map.contains_key(name) {
            return Err(ManagerError::DuplicateNameError(name.to_owned()));
        }
        self.map.insert(name.to_owned(), obj);
        debug!(entry = name, "registered");
        Ok(())
    }

    pub fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let name = named_object.name();
        let obj = (self.get_obj_from_json)(name, json_value).inspect_err(|error| {
            warn!(entry = name, %error, "rejected json entry");
        })?;
        self.insert(name, obj)
    }

    pub fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// Accepts either a single json object or an array of them.
    pub fn insert_obj_from_json_value(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        match json_value {
            serde_json::Value::Array(json_array) => self.insert_obj_from_json_vec(&json_array),
            json_object => self.insert_obj_from_json(json_object)
        }
    }

    pub fn from_reader(&mut self, file_path: impl AsRef<Path>) -> Result<(), ManagerError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let before = self.map.len();
        self.insert_obj_from_json_value(json_value)?;
        info!(path = %file_path.display(), entries = self.map.len() - before, "loaded");
        Ok(())
    }

    pub fn build(self) -> FrozenManager<V> {
        FrozenManager { map: self.map }
    }
}

impl <V> IManager<V> for ManagerBuilder<V> where
    V: Clone {
    fn map(&self) -> &HashMap<String, V> {
        &self.map
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FrozenManager
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only registry; `Send + Sync` whenever `V` is.
#[derive(Clone)]
pub struct FrozenManager<V> {
    map: HashMap<String, V>
}

impl <V> Default for FrozenManager<V> {
    fn default() -> Self {
        FrozenManager { map: HashMap::new() }
    }
}

impl <V> IManager<V> for FrozenManager<V> where
    V: Clone {
    fn map(&self) -> &HashMap<String, V> {
        &self.map
    }
}
