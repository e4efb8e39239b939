//! Single-writer handle for a catalog reached from several threads.
//!
//! `Catalog` itself is a plain value with no internal locking. Anything that hands the
//! same catalog to more than one thread goes through `SharedCatalog`, which serializes
//! writers behind one `RwLock`.

use std::sync::{Arc, RwLock};

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};

/// Cloneable, thread-safe handle to one catalog.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Runs `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> CatalogResult<R> {
        let guard = self.inner.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(f(&guard))
    }

    /// Runs `f` with exclusive access.
    ///
    /// Everything inside `f` sees no other writer, so allocating an id and inserting
    /// under it in the same closure cannot collide with another thread.
    pub fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> CatalogResult<R> {
        let mut guard = self.inner.write().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(f(&mut guard))
    }

    /// Owned copy of the current contents.
    pub fn snapshot(&self) -> CatalogResult<Catalog> {
        self.read(Catalog::clone)
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
