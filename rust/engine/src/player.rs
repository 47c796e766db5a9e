use serde::{Deserialize, Serialize};

/// A tournament participant. Identity is the engine-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: String,
    name: String,
    active: bool,
    /// Seed or rating used when the tournament sorts players.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
}

impl Player {
    pub(crate) fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            active: true,
            value: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = Some(value);
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}
