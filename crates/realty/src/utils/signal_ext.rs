//! Extension trait for Dioxus signals.
//!
//! Core state types (panels, notifier, tab controller) are plain structs whose
//! transitions return a value, such as a load ticket or a notice.
//! `apply` runs such a transition against the signal's value and hands the
//! result back, so call sites stay one line:
//!
//! ```ignore
//! let ticket = panel.apply(|p| p.begin_load());
//! tabs.apply(|t| t.select(ResourceKind::Realtors));
//! ```

use dioxus::prelude::*;

pub trait SignalExt<T: Clone + 'static> {
    /// Mutates a copy of the value, writes it back, and returns what `f`
    /// returned.
    ///
    /// The signal is not borrowed while `f` runs, so `f` may read other
    /// signals freely.
    fn apply<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;

    /// [`apply`](SignalExt::apply) for closures without a result.
    fn mutate(&mut self, f: impl FnOnce(&mut T)) {
        self.apply(f)
    }
}

impl<T: Clone + 'static> SignalExt<T> for Signal<T> {
    fn apply<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut value = self.peek().clone();
        let result = f(&mut value);
        self.set(value);
        result
    }
}

// Not unit tested: exercising signals needs a live Dioxus runtime.
