use crate::entry::Entry;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// The declarative edit list: ids to remove and entries to add, loaded from
/// a TOML file so the catalog changes live apart from the tool itself.
#[derive(Debug, Default, Deserialize)]
pub struct Patch {
    #[serde(default)]
    pub remove: Vec<String>,
    #[serde(default)]
    pub add: Vec<Entry>,
}

impl Patch {
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let content = fs::read_to_string(path)
            .map_err(|e| PatchError::Io(path.display().to_string(), e))?;
        toml::from_str(&content).map_err(|e| PatchError::Parse(path.display().to_string(), e))
    }

    pub fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.add.is_empty()
    }
}

#[derive(Debug)]
pub enum PatchError {
    Io(String, std::io::Error),
    Parse(String, toml::de::Error),
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::Io(path, e) => write!(f, "Could not read patch file \"{path}\": {e}"),
            PatchError::Parse(path, e) => write!(f, "Invalid patch file \"{path}\": {e}"),
        }
    }
}

impl std::error::Error for PatchError {}
