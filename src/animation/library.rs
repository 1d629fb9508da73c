//! Storage for named animations.

#[cfg(not(target_arch = "wasm32"))]
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::io;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use log::info;

use crate::error::FetchError;
use crate::schema::AnimationRecord;

/// Where sessions load animations from and save new ones to.
pub trait AnimationSource {
    /// Fetch one animation by id.
    fn fetch(&self, id: &str) -> Result<AnimationRecord, FetchError>;

    /// Store a new animation, returning its id.
    fn create(&mut self, record: &AnimationRecord) -> Result<String, FetchError>;
}

/// Ids are plain tokens so they can never escape the storage directory.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Directory of animations, one pretty-printed JSON record per file.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct AnimationLibrary {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl AnimationLibrary {
    /// Open (and create if needed) a library directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Ids of every stored animation, sorted.
    pub fn ids(&self) -> io::Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && is_valid_id(stem)
            {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    pub fn len(&self) -> io::Result<usize> {
        Ok(self.ids()?.len())
    }

    pub fn is_empty(&self) -> io::Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AnimationSource for AnimationLibrary {
    fn fetch(&self, id: &str) -> Result<AnimationRecord, FetchError> {
        if !is_valid_id(id) {
            return Err(FetchError::NotFound(id.to_string()));
        }
        let path = self.path_for(id);
        let json = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FetchError::NotFound(id.to_string()),
            _ => FetchError::Io(e),
        })?;
        AnimationRecord::from_json(&json)
    }

    fn create(&mut self, record: &AnimationRecord) -> Result<String, FetchError> {
        let id = loop {
            let candidate = format!("{:016x}", rand::random::<u64>());
            if !self.path_for(&candidate).exists() {
                break candidate;
            }
        };
        fs::write(self.path_for(&id), record.to_json()?)?;
        info!("stored animation {:?} as {}", record.title, id);
        Ok(id)
    }
}
