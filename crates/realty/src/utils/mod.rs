//! Small helpers shared by the components.

pub mod signal_ext;

pub use signal_ext::SignalExt;
