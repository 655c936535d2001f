//! App shell: the persistent bar above the resource panels.

mod appbar;

pub use appbar::AppBar;
