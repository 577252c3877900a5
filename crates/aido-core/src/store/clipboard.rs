use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ClipboardItem, ClipboardStore, StoreError};

const MAGIC: &[u8; 4] = b"AICB";
const VERSION: u8 = 1;
/// magic + version + crc32
const HEADER_LEN: usize = 9;

/// Clipboard history file (AICB format).
#[derive(Debug, Clone)]
pub struct ClipboardFile {
    path: PathBuf,
}

impl ClipboardFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn to_bytes(items: &[ClipboardItem]) -> Result<Vec<u8>, StoreError> {
        let body = bincode::serialize(items).map_err(|e| StoreError::Format(e.to_string()))?;
        let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&crc32fast::hash(&body).to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Vec<ClipboardItem>, StoreError> {
        if bytes.len() < HEADER_LEN {
            return Err(StoreError::Format("too short".to_string()));
        }
        if &bytes[0..4] != MAGIC {
            return Err(StoreError::Format("bad magic".to_string()));
        }
        if bytes[4] != VERSION {
            return Err(StoreError::Format("unsupported version".to_string()));
        }
        let mut crc = [0u8; 4];
        crc.copy_from_slice(&bytes[5..9]);
        let body = &bytes[HEADER_LEN..];
        if crc32fast::hash(body) != u32::from_le_bytes(crc) {
            return Err(StoreError::Format("checksum mismatch".to_string()));
        }
        bincode::deserialize(body).map_err(|e| StoreError::Format(e.to_string()))
    }
}

impl ClipboardStore for ClipboardFile {
    /// Empty history if the file doesn't exist.
    fn load(&self) -> Result<Vec<ClipboardItem>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomic write: write to .tmp then rename.
    fn save(&self, items: &[ClipboardItem]) -> Result<(), StoreError> {
        let bytes = Self::to_bytes(items)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
