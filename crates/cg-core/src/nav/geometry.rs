//! Nav highlight geometry

use egui::Rect;

/// Pixel rectangle of the underline below the active nav button, relative
/// to the nav container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HighlightGeometry {
    pub offset_left: f32,
    pub width: f32,
}

/// Geometry of `button` relative to `container`
pub fn highlight_for(button: Rect, container: Rect) -> HighlightGeometry {
    HighlightGeometry {
        offset_left: button.left() - container.left(),
        width: button.width(),
    }
}

/// Carries the highlight geometry across frames.
///
/// When no button matches the active section (mid re-render during a
/// language switch, before the buttons remount) the previous geometry is
/// retained instead of collapsing to a zero-width flash.
#[derive(Debug, Default)]
pub struct HighlightTracker {
    current: HighlightGeometry,
}

impl HighlightTracker {
    /// Recompute from the active button's rect, or keep the last known
    /// geometry if the button is not mounted this frame
    pub fn update(&mut self, button: Option<Rect>, container: Rect) -> HighlightGeometry {
        if let Some(button) = button {
            self.current = highlight_for(button, container);
        }
        self.current
    }

    pub fn current(&self) -> HighlightGeometry {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn rect(left: f32, width: f32) -> Rect {
        Rect::from_min_max(pos2(left, 0.0), pos2(left + width, 40.0))
    }

    #[test]
    fn test_geometry_relative_to_container() {
        let geometry = highlight_for(rect(250.0, 60.0), rect(200.0, 600.0));
        assert_eq!(
            geometry,
            HighlightGeometry {
                offset_left: 50.0,
                width: 60.0
            }
        );
    }

    #[test]
    fn test_tracker_retains_last_good_geometry() {
        let mut tracker = HighlightTracker::default();
        let container = rect(200.0, 600.0);

        let first = tracker.update(Some(rect(250.0, 60.0)), container);

        // No matching button this frame: keep the previous rectangle
        let second = tracker.update(None, container);
        assert_eq!(first, second);
        assert_eq!(tracker.current().width, 60.0);
    }

    #[test]
    fn test_tracker_follows_active_button() {
        let mut tracker = HighlightTracker::default();
        let container = rect(200.0, 600.0);

        tracker.update(Some(rect(250.0, 60.0)), container);
        let moved = tracker.update(Some(rect(340.0, 80.0)), container);

        assert_eq!(moved.offset_left, 140.0);
        assert_eq!(moved.width, 80.0);
    }
}
