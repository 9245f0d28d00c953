/// Something that invalidates the current layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Scroll,
    Resize,
    TotalCountChanged,
    ExtentChanged,
    Invalidate,
}

impl Trigger {
    /// Structural triggers require every bound slot to be laid out again.
    pub fn is_structural(self) -> bool {
        !matches!(self, Self::Scroll)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateState {
    Clean,
    Dirty,
    /// The first tick must lay out everything.
    #[default]
    DirtyForced,
}

impl UpdateState {
    pub fn is_dirty(self) -> bool {
        !matches!(self, Self::Clean)
    }

    pub fn is_forced(self) -> bool {
        matches!(self, Self::DirtyForced)
    }
}

/// Coalesces triggers into one pending pass per tick.
///
/// Triggers only flip flags; the work happens when the tick driver calls [`Self::take`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateScheduler {
    state: UpdateState,
}

impl UpdateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UpdateState {
        self.state
    }

    pub fn mark(&mut self, trigger: Trigger) {
        self.state = if trigger.is_structural() {
            UpdateState::DirtyForced
        } else {
            match self.state {
                UpdateState::DirtyForced => UpdateState::DirtyForced,
                _ => UpdateState::Dirty,
            }
        };
    }

    /// Consumes the pending pass, leaving the scheduler clean.
    ///
    /// Returns `None` when nothing is pending, otherwise `Some(forced)`.
    pub fn take(&mut self) -> Option<bool> {
        let prev = core::mem::replace(&mut self.state, UpdateState::Clean);
        prev.is_dirty().then_some(prev.is_forced())
    }
}
