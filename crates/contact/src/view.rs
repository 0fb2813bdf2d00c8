use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
};

/// Page views with a submission in flight.
///
/// This is the server side of the disabled submit button: a second submit
/// for the same view is refused while the first one is pending.
#[derive(Clone, Default, Debug)]
pub struct ViewLocks(Arc<Mutex<HashSet<String>>>);

impl ViewLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, view: impl Into<String>) -> Option<ViewGuard> {
        let view = view.into();
        let mut views = self.0.lock().unwrap_or_else(PoisonError::into_inner);

        if !views.insert(view.to_owned()) {
            return None;
        }

        Some(ViewGuard {
            view,
            locks: self.clone(),
        })
    }
}

/// Releases its page view when dropped.
#[derive(Debug)]
pub struct ViewGuard {
    view: String,
    locks: ViewLocks,
}

impl ViewGuard {
    pub fn view(&self) -> &str {
        &self.view
    }
}

impl Drop for ViewGuard {
    fn drop(&mut self) {
        self.locks
            .0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.view);
    }
}
