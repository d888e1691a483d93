/// Write-once slot for handles that live as long as the process
///
/// Readers on any thread get an error until the slot is filled, never a panic.
use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;

pub struct Registration<T>(OnceCell<T>);

impl<T> Registration<T> {
    pub const fn new() -> Self {
        Self(OnceCell::new())
    }

    pub fn get(&self) -> Result<&T> {
        self.0
            .get()
            .ok_or_else(|| anyhow!("Android context not registered yet"))
    }

    pub fn is_registered(&self) -> bool {
        self.0.get().is_some()
    }

    /// Fill the slot from `init` unless it is already filled.
    ///
    /// Returns `true` only for the call that stored the value. A failed `init`
    /// leaves the slot empty.
    pub fn register_with<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<bool, E> {
        if self.is_registered() {
            return Ok(false);
        }
        let mut stored = false;
        self.0.get_or_try_init(|| {
            stored = true;
            init()
        })?;
        Ok(stored)
    }
}

impl<T> Default for Registration<T> {
    fn default() -> Self {
        Self::new()
    }
}
