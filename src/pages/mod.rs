//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes widgets from `components`; pages hold no state of
//! their own.

pub mod auth;
pub mod home;
