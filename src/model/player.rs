use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type PlayerId = String;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
}

/// Resolved id to profile lookup supplied by the caller.
#[derive(Clone, Debug, Default)]
pub struct PlayerDirectory {
    profiles: HashMap<PlayerId, PlayerProfile, RandomState>,
}

impl PlayerDirectory {
    #[must_use]
    pub fn new(profiles: impl IntoIterator<Item = PlayerProfile>) -> Self {
        Self {
            profiles: profiles.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlayerProfile> {
        self.profiles.get(id)
    }

    /// Display name for a player, falling back to the id.
    #[must_use]
    pub fn display_name(&self, id: &str) -> String {
        self.get(id)
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
            .map_or_else(|| id.to_string(), str::to_string)
    }
}
