// thriftstore/src/sync/mirror.rs

use parking_lot::RwLock;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::LocalMirror;
use crate::cart::CartItem;
use crate::error::{Error, Result};

/// Fixed key the mirror is stored under.
pub const STORAGE_KEY: &str = "cart";

/// Mirror persisted as a JSON array of cart items in `<dir>/cart.json`.
#[derive(Debug, Clone)]
pub struct FileMirror {
  path: PathBuf,
}

impl FileMirror {
  pub fn new(dir: impl AsRef<Path>) -> Self {
    FileMirror {
      path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl LocalMirror for FileMirror {
  fn load(&self) -> Result<Option<Vec<CartItem>>> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(Error::Mirror(format!("reading {}: {}", self.path.display(), e))),
    };
    serde_json::from_str(&raw)
      .map(Some)
      .map_err(|e| Error::Mirror(format!("parsing {}: {}", self.path.display(), e)))
  }

  fn store(&self, items: &[CartItem]) -> Result<()> {
    if let Some(dir) = self.path.parent() {
      fs::create_dir_all(dir).map_err(|e| Error::Mirror(format!("creating {}: {}", dir.display(), e)))?;
    }
    let raw = serde_json::to_string(items).map_err(|e| Error::Mirror(e.to_string()))?;
    fs::write(&self.path, raw).map_err(|e| Error::Mirror(format!("writing {}: {}", self.path.display(), e)))
  }
}

/// Mirror held in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryMirror {
  slot: Arc<RwLock<Option<Vec<CartItem>>>>,
}

impl MemoryMirror {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_items(items: Vec<CartItem>) -> Self {
    MemoryMirror {
      slot: Arc::new(RwLock::new(Some(items))),
    }
  }

  pub fn snapshot(&self) -> Option<Vec<CartItem>> {
    self.slot.read().clone()
  }
}

impl LocalMirror for MemoryMirror {
  fn load(&self) -> Result<Option<Vec<CartItem>>> {
    Ok(self.snapshot())
  }

  fn store(&self, items: &[CartItem]) -> Result<()> {
    *self.slot.write() = Some(items.to_vec());
    Ok(())
  }
}
