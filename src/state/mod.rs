//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each widget owns one focused state type with pure transition methods;
//! components hold it in an `RwSignal` and only render and wire events.

pub mod chat;
pub mod notifications;
pub mod theme;
