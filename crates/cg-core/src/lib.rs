//! Core functionality for the single-page community site
//!
//! This crate provides the section registry, the active-section state
//! management and the scroll-driven visibility tracking that the
//! navigation UI is built on.

pub mod nav;
pub mod sections;

// Re-export commonly used types
pub use nav::{
    HighlightGeometry, HighlightTracker, NavEvent, RegionResolver, ScrollBehavior, ScrollRequest,
    SectionEngine, SectionSubscriber, VisibilityBand, VisibilityObserver, HEADER_CLEARANCE,
};
pub use sections::SectionRegistry;
