use std::cell::RefCell;

use anyhow::Result;

use crate::model::Session;

/// Where the provider client keeps the session between page loads. Assumes
/// it's the only reader/writer of its backing store.
pub trait SessionPersistence {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self);
}

/// Keeps the session for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    session: RefCell<Option<Session>>,
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        self.session.borrow_mut().take();
    }
}
