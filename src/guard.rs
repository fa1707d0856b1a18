use crate::model::item::TimelineItem;

/// Error from the persistence collaborator. All-or-nothing: a failed save is
/// assumed to have written nothing.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to persist timeline items: {0}")]
pub struct PersistenceError(pub String);

/// Persistence collaborator — the surrounding application's storage for
/// timeline items.
pub trait ItemStore {
    fn load_items(&mut self) -> Result<Vec<TimelineItem>, PersistenceError>;
    fn save_items(&mut self, items: &[TimelineItem]) -> Result<(), PersistenceError>;
}

/// Navigation collaborator — fire-and-forget route changes, assumed to
/// always succeed.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Unsaved-changes guard state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// No edits since the last successful save
    Clean,
    /// Unsaved edits exist
    Dirty,
    /// A navigation request arrived while dirty; the target path is held
    /// until the user confirms, discards, or cancels
    PendingConfirm { path: String },
}

/// What happened to a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Nothing unsaved — navigation went through immediately
    Navigated,
    /// Unsaved edits — navigation suspended pending confirmation
    Suspended,
}

/// The navigation guard: a strict three-state machine that intercepts route
/// changes while unsaved edits exist. At most one confirmation can be
/// pending; a second request while pending just replaces the recorded path.
#[derive(Debug)]
pub struct NavGuard {
    state: GuardState,
}

impl Default for NavGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl NavGuard {
    pub fn new() -> Self {
        NavGuard {
            state: GuardState::Clean,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// True while edits exist that the save collaborator has not seen
    pub fn is_dirty(&self) -> bool {
        !matches!(self.state, GuardState::Clean)
    }

    /// The suspended navigation target, if a confirmation is pending
    pub fn pending_path(&self) -> Option<&str> {
        match &self.state {
            GuardState::PendingConfirm { path } => Some(path),
            _ => None,
        }
    }

    /// Record an accepted user edit
    pub fn mark_dirty(&mut self) {
        if matches!(self.state, GuardState::Clean) {
            self.state = GuardState::Dirty;
        }
    }

    /// Record a successful save (or a deliberate discard)
    pub fn mark_clean(&mut self) {
        self.state = GuardState::Clean;
    }

    /// Attempt a route change. Clean passes straight through; Dirty suspends
    /// the navigation and records the target. While already suspended, the
    /// newest request wins — only one prompt can be on screen.
    pub fn request_navigation(&mut self, path: &str, nav: &mut dyn Navigator) -> NavOutcome {
        match &mut self.state {
            GuardState::Clean => {
                nav.navigate(path);
                NavOutcome::Navigated
            }
            GuardState::Dirty => {
                self.state = GuardState::PendingConfirm {
                    path: path.to_string(),
                };
                NavOutcome::Suspended
            }
            GuardState::PendingConfirm { path: recorded } => {
                *recorded = path.to_string();
                NavOutcome::Suspended
            }
        }
    }

    /// Resolve a pending confirmation by saving, then performing the recorded
    /// navigation. On save failure nothing is navigated and the confirmation
    /// stays pending, so the user can retry or discard.
    pub fn confirm_and_save(
        &mut self,
        items: &[TimelineItem],
        store: &mut dyn ItemStore,
        nav: &mut dyn Navigator,
    ) -> Result<(), PersistenceError> {
        let path = match &self.state {
            GuardState::PendingConfirm { path } => path.clone(),
            _ => return Ok(()),
        };
        store.save_items(items)?;
        self.state = GuardState::Clean;
        nav.navigate(&path);
        Ok(())
    }

    /// Resolve a pending confirmation by leaving without saving. The edits
    /// themselves stay in memory; the next one starts a fresh dirty cycle.
    pub fn discard_and_leave(&mut self, nav: &mut dyn Navigator) {
        let path = match &self.state {
            GuardState::PendingConfirm { path } => path.clone(),
            _ => return,
        };
        self.state = GuardState::Clean;
        nav.navigate(&path);
    }

    /// Resolve a pending confirmation by staying put: back to Dirty, recorded
    /// path dropped, no navigation.
    pub fn cancel_navigation(&mut self) {
        if matches!(self.state, GuardState::PendingConfirm { .. }) {
            self.state = GuardState::Dirty;
        }
    }
}
