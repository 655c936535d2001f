//! Which resource view is active.

use crate::resource::ResourceKind;

/// Tracks the active tab and how many times a tab was selected.
///
/// Every call to [`TabController::select`] bumps the epoch, including
/// re-selecting the tab that is already active. Views watch the epoch and
/// reload their list whenever it changes while they are active, so a tab
/// switch is always a full refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabController {
    current: ResourceKind,
    epoch: u64,
}

/// Result of a selection: the tab that must now load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSwitch {
    pub previous: ResourceKind,
    pub current: ResourceKind,
    pub epoch: u64,
}

impl TabController {
    pub fn current(&self) -> ResourceKind {
        self.current
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_active(&self, tab: ResourceKind) -> bool {
        self.current == tab
    }

    pub fn select(&mut self, tab: ResourceKind) -> TabSwitch {
        let previous = self.current;
        self.current = tab;
        self.epoch += 1;
        TabSwitch {
            previous,
            current: tab,
            epoch: self.epoch,
        }
    }
}
