//! Moderation use-case services and the admin capability gate.
//!
//! # Responsibility
//! - Orchestrate store mutations into admin-level actions.
//! - Keep "is this action permitted" separate from how that permission was
//!   established, so the gate can be swapped without touching data logic.

pub mod gate;
pub mod moderation;
