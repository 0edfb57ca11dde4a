//! Region resolution seam between the core and the rendered page

use egui::Rect;

/// Capability for resolving a section's rendered region by identifier.
///
/// Rects are in content space: y measured from the top of the scrollable
/// content, not the screen. A section that is not currently mounted
/// resolves to `None` and is skipped by callers.
pub trait RegionResolver {
    fn resolve_region(&self, id: &str) -> Option<Rect>;
}

impl RegionResolver for ahash::AHashMap<String, Rect> {
    fn resolve_region(&self, id: &str) -> Option<Rect> {
        self.get(id).copied()
    }
}
