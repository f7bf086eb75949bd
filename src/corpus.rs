use crate::error::{ShingleError, ShingleResult};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// One unit of input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub name: String,
    pub text: String,
}

impl Corpus {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl AsRef<str> for Corpus {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

fn read_file(path: &Path) -> ShingleResult<Corpus> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| {
        ShingleError::Validation(format!("Corpus is not valid UTF-8: {:?}", path))
    })?;
    debug!("Read corpus {:?} ({} bytes)", path, text.len());
    Ok(Corpus::new(path.to_string_lossy(), text))
}

/// Loads a single file, or every regular file below a directory.
///
/// Directory entries are returned sorted by path. Files inside a
/// directory that are not UTF-8 are skipped with a warning; an explicit
/// file that is not UTF-8 is an error.
pub fn load_path<P: AsRef<Path>>(path: P) -> ShingleResult<Vec<Corpus>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ShingleError::Validation(format!(
            "Corpus not found: {:?}",
            path
        )));
    }

    if path.is_file() {
        return Ok(vec![read_file(path)?]);
    }

    let walker = WalkDir::new(path).follow_links(false).sort_by_file_name();
    let mut corpora = Vec::new();
    for entry in walker.into_iter() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("⚠️  Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match read_file(entry.path()) {
            Ok(corpus) => corpora.push(corpus),
            Err(ShingleError::Validation(msg)) => warn!("⚠️  Skipping: {}", msg),
            Err(e) => return Err(e),
        }
    }
    Ok(corpora)
}

/// Loads every path in turn, preserving argument order.
pub fn load_paths<P: AsRef<Path>>(paths: &[P]) -> ShingleResult<Vec<Corpus>> {
    let mut corpora = Vec::new();
    for path in paths {
        corpora.extend(load_path(path)?);
    }
    info!("📂 Loaded {} corpora from {} paths", corpora.len(), paths.len());
    Ok(corpora)
}

/// Reads a whole stream (e.g. stdin) as one corpus.
pub fn read_corpus<R: Read>(mut reader: R, name: &str) -> ShingleResult<Corpus> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(Corpus::new(name, text))
}
