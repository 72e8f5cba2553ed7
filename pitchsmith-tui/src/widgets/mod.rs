//! Reusable widget components.

pub mod section;

pub use section::SectionPanel;
