use std::collections::HashMap;

use serde::{de::IgnoredAny, Deserialize};

/// Repository metadata as returned by `GET /api/v1/repository/{namespace}/{name}`.
///
/// Only the keys of `tags` are interpreted. Other response fields and the
/// per-tag metadata are skipped while deserializing.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub tags: HashMap<String, IgnoredAny>,
}

impl Repository {
    pub fn has_tag(&self, version: &str) -> bool {
        self.tags.contains_key(version)
    }
}
