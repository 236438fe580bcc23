//! UI components.

pub mod venn_diagram;
