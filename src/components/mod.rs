//! Reusable UI components.

pub mod arc_diagram;
