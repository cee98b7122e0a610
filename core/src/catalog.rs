use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{GameError, PictureId, Result};

/// The stock picture pool.
pub const DEFAULT_PICTURE_NAMES: [&str; 17] = [
    "ananas",
    "arbuz",
    "banan",
    "granat",
    "grusha",
    "kiwi",
    "klubnika",
    "limon",
    "malina",
    "malina2",
    "persik",
    "potato",
    "sliva",
    "vinograd",
    "vinograd1",
    "vinograd2",
    "vishnia",
];

/// Ordered pool of picture names. A [`PictureId`] is a slot in this pool;
/// the generator cycles through the pool when the grid needs more pairs
/// than the pool has entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PictureCatalog {
    names: Vec<String>,
}

impl PictureCatalog {
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name behind a picture id, `None` when the id falls outside the pool.
    /// The presentation layer decides what to render for an absent mapping.
    pub fn name_of(&self, id: PictureId) -> Option<&str> {
        self.names.get(usize::from(id)).map(String::as_str)
    }
}

impl Default for PictureCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_PICTURE_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}
