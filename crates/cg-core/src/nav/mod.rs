use serde::{Deserialize, Serialize};

mod engine;
mod geometry;
mod layout;
mod observer;
mod subscriber;

pub use engine::SectionEngine;
pub use geometry::{highlight_for, HighlightGeometry, HighlightTracker};
pub use layout::RegionResolver;
pub use observer::VisibilityObserver;
pub use subscriber::SectionSubscriber;

/// Vertical clearance kept above a section when scrolling to it, so the
/// fixed header does not cover its heading. Pixels.
pub const HEADER_CLEARANCE: f32 = 80.0;

/// Navigation events consumed by [`SectionEngine::handle_event`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// A section's region crossed into the visibility band while scrolling
    SectionEnteredBand(String),
    /// The user clicked a nav item
    NavClicked(String),
    /// The viewport changed size; derived geometry must be recomputed
    ViewportResized,
}

/// Viewport sub-region used to decide when a section counts as "in view".
///
/// A section is flagged as soon as it starts entering the upper part of the
/// viewport, not only once it is fully visible, so the nav highlight leads
/// the scroll instead of lagging it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VisibilityBand {
    /// Pixels reserved at the top of the viewport for the fixed header
    pub top_inset: f32,
    /// Fraction of the viewport height excluded at the bottom
    pub bottom_fraction: f32,
}

impl Default for VisibilityBand {
    fn default() -> Self {
        Self {
            top_inset: 100.0,
            bottom_fraction: 0.66,
        }
    }
}

impl VisibilityBand {
    /// Band limits in viewport coordinates for the given viewport height
    pub fn limits(&self, viewport_height: f32) -> (f32, f32) {
        (self.top_inset, viewport_height * (1.0 - self.bottom_fraction))
    }
}

/// How a programmatic scroll should be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    /// Animated, non-blocking scroll
    Smooth,
    /// Jump straight to the target
    Instant,
}

/// A request for the page shell to scroll the content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Target offset from the top of the content, px
    pub target_offset: f32,
    pub behavior: ScrollBehavior,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_limits() {
        let band = VisibilityBand::default();
        let (top, bottom) = band.limits(900.0);
        assert_eq!(top, 100.0);
        // Band ends at 34% of the viewport height
        assert!((bottom - 306.0).abs() < 0.01);
    }
}
