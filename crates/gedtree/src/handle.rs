use crate::{Engine, FamilyTree, Result};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared access to the current [`FamilyTree`].
///
/// Readers take an `Arc` snapshot; a reload builds the new tree first and then swaps the
/// pointer, so nobody ever sees a half-derived tree.
#[derive(Debug, Default)]
pub struct TreeHandle {
    current: RwLock<Arc<FamilyTree>>,
}

impl TreeHandle {
    pub fn new(tree: FamilyTree) -> Self {
        Self {
            current: RwLock::new(Arc::new(tree)),
        }
    }

    pub fn snapshot(&self) -> Arc<FamilyTree> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Installs `tree` and returns the previous one.
    pub fn replace(&self, tree: FamilyTree) -> Arc<FamilyTree> {
        let next = Arc::new(tree);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    pub fn reload(&self, engine: &Engine, text: &str) -> Arc<FamilyTree> {
        self.replace(engine.parse(text))
    }

    /// On a read failure the current tree stays in place.
    pub fn reload_file(&self, engine: &Engine, path: impl AsRef<Path>) -> Result<Arc<FamilyTree>> {
        let tree = engine.load_file(path)?;
        Ok(self.replace(tree))
    }
}
