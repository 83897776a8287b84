//! Liveness tokens guarding async resume points

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag that stays `true` until the owning scene is destroyed.
///
/// A load task holds a clone and must check [`Liveness::is_alive`] after
/// every await point before touching scene state.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Mark the owner as torn down. Irreversible.
    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoke_is_seen_by_clones() {
        let token = Liveness::new();
        let held_by_task = token.clone();
        assert!(held_by_task.is_alive());
        token.revoke();
        assert!(!held_by_task.is_alive());
    }
}
