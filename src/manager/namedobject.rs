use serde::Deserialize;

/// Every registry entry carries a `name` next to its own fields.
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
