use std::fs;
use std::path::{Path, PathBuf};

/// The catalog file held fully in memory as one text buffer.
///
/// No structural parsing happens here; the pruner and appender operate on
/// the raw text and hand back replacement buffers.
pub struct Document {
    pub text: String,
    pub filename: Option<PathBuf>,
    pub modified: bool,
}

impl Document {
    pub fn from_file(filename: PathBuf) -> Result<Self, std::io::Error> {
        let text = fs::read_to_string(&filename)?;
        Ok(Self {
            text,
            filename: Some(filename),
            modified: false,
        })
    }

    #[cfg(test)]
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            filename: None,
            modified: false,
        }
    }

    pub fn replace_text(&mut self, text: String) {
        if text != self.text {
            self.text = text;
            self.modified = true;
        }
    }

    pub fn save(&mut self) -> Result<usize, std::io::Error> {
        if let Some(ref filename) = self.filename {
            self.save_as(filename.clone())
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "No filename specified",
            ))
        }
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// failure mid-write cannot leave a truncated catalog behind.
    pub fn save_as(&mut self, filename: PathBuf) -> Result<usize, std::io::Error> {
        let byte_count = self.text.len();
        let tmp_path = tmp_sibling(&filename);
        fs::write(&tmp_path, &self.text)?;
        if let Err(e) = fs::rename(&tmp_path, &filename) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        self.filename = Some(filename);
        self.modified = false;
        Ok(byte_count)
    }
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| ".catalog".into());
    name.push(".tmp");
    path.with_file_name(name)
}
