//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page widgets and wire DOM events to the state types in
//! `state`, which they read and write through Leptos context providers.

pub mod ajax_form;
pub mod auth_form;
pub mod chat_widget;
pub mod dark_mode_switch;
pub mod flash_messages;
