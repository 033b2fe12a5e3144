//! Reusable page component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page widgets from the shared `PageHandle` context and
//! forward user interaction back into it.

pub mod project_list;
pub mod skills_panel;
pub mod video_modal;
