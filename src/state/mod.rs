//! Page view state.
//!
//! DESIGN
//! ======
//! `view` holds the plain flags and their pure transitions; `controller`
//! owns the live copy together with the embedded video session.

pub mod controller;
pub mod view;
