//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and presentation
//! mappings from component logic to improve reuse and testability.

pub mod regions;
pub mod viewport;
pub mod visual;
