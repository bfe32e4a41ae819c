//! High score persistence seam
//!
//! The engine loads the high score once at construction and saves it every
//! time it grows. Storage failures never stop the game: a failed load means
//! "no prior high score", a failed save is logged and forgotten.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use anyhow::{bail, Result};

/// Where the high score lives between sessions
pub trait HighScoreStore: fmt::Debug {
    fn load(&mut self) -> Result<u32>;
    fn save(&mut self, high_score: u32) -> Result<()>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    value: u32,
    saves: u32,
    unavailable: bool,
}

/// In-memory store.
///
/// Clones share the same slot, so a test can hand one clone to the engine and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryHighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `value`
    pub fn with_value(value: u32) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().value = value;
        store
    }

    /// Store whose load and save always fail
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.inner.borrow_mut().unavailable = true;
        store
    }

    pub fn value(&self) -> u32 {
        self.inner.borrow().value
    }

    /// Successful saves so far
    pub fn save_count(&self) -> u32 {
        self.inner.borrow().saves
    }
}

impl HighScoreStore for MemoryHighScores {
    fn load(&mut self) -> Result<u32> {
        let inner = self.inner.borrow();
        if inner.unavailable {
            bail!("high score storage unavailable");
        }
        Ok(inner.value)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            bail!("high score storage unavailable");
        }
        inner.value = high_score;
        inner.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let observer = MemoryHighScores::with_value(40);
        let mut handle = observer.clone();
        assert_eq!(handle.load().unwrap(), 40);
        handle.save(900).unwrap();
        assert_eq!(observer.value(), 900);
        assert_eq!(observer.save_count(), 1);
    }

    #[test]
    fn unavailable_store_fails_both_ways() {
        let mut store = MemoryHighScores::unavailable();
        assert!(store.load().is_err());
        assert!(store.save(1).is_err());
        assert_eq!(store.save_count(), 0);
    }
}
