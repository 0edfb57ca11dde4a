//! Scroll-driven visibility observation

use super::engine::SectionEngine;
use super::{NavEvent, RegionResolver, VisibilityBand};
use crate::sections::SectionRegistry;
use ahash::AHashMap;
use std::sync::Arc;

/// Watches the registered section regions and reports band entries to the
/// engine.
///
/// The page shell calls [`evaluate`](Self::evaluate) once per frame with the
/// current scroll offset. Entries fire on the out-of-band to in-band edge
/// only, so a section reports once when it crosses into the band, not on
/// every frame it stays there. When several sections cross in the same pass
/// the last one in registry order wins; ties are transient while scrolling.
pub struct VisibilityObserver {
    registry: SectionRegistry,
    band: VisibilityBand,
    engine: Option<Arc<SectionEngine>>,
    in_band: AHashMap<String, bool>,
}

impl VisibilityObserver {
    /// Observe with the default band (100 px top inset, bottom 66% cut off)
    pub fn new(registry: SectionRegistry, engine: Arc<SectionEngine>) -> Self {
        Self::with_band(registry, engine, VisibilityBand::default())
    }

    pub fn with_band(
        registry: SectionRegistry,
        engine: Arc<SectionEngine>,
        band: VisibilityBand,
    ) -> Self {
        Self {
            registry,
            band,
            engine: Some(engine),
            in_band: AHashMap::new(),
        }
    }

    /// Evaluate the band rule against the current layout.
    ///
    /// `scroll_offset` converts the content-space regions to
    /// viewport-relative positions. Sections without a resolvable region are
    /// skipped silently; their edge state resets so a later remount fires a
    /// fresh entry.
    pub fn evaluate(
        &mut self,
        scroll_offset: f32,
        viewport_height: f32,
        regions: &dyn RegionResolver,
    ) {
        let Some(engine) = self.engine.clone() else {
            return;
        };
        let (band_top, band_bottom) = self.band.limits(viewport_height);

        for id in self.registry.iter() {
            let Some(region) = regions.resolve_region(id) else {
                self.in_band.insert(id.to_string(), false);
                continue;
            };

            let top = region.top() - scroll_offset;
            let bottom = region.bottom() - scroll_offset;
            let inside = top < band_bottom && bottom > band_top;

            let was_inside = self.in_band.insert(id.to_string(), inside).unwrap_or(false);
            if inside && !was_inside {
                engine.handle_event(NavEvent::SectionEnteredBand(id.to_string()));
            }
        }
    }

    /// Stop reporting to the engine.
    ///
    /// Called when the page shell is torn down; after this no evaluation
    /// mutates engine state.
    pub fn detach(&mut self) {
        self.engine = None;
        self.in_band.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.engine.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::HEADER_CLEARANCE;
    use egui::{pos2, Rect};

    const VIEWPORT: f32 = 900.0;

    fn registry() -> SectionRegistry {
        SectionRegistry::new(["home", "about", "church-life", "contact"])
    }

    fn region(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(1000.0, bottom))
    }

    /// home/about/church-life/contact stacked 800 px each
    fn page_layout() -> AHashMap<String, Rect> {
        let mut regions = AHashMap::new();
        regions.insert("home".to_string(), region(0.0, 800.0));
        regions.insert("about".to_string(), region(800.0, 1600.0));
        regions.insert("church-life".to_string(), region(1600.0, 2400.0));
        regions.insert("contact".to_string(), region(2400.0, 3200.0));
        regions
    }

    #[test]
    fn test_section_entering_band_becomes_active() {
        let engine = Arc::new(SectionEngine::new(registry()));
        let mut observer = VisibilityObserver::new(registry(), engine.clone());
        let mut regions = AHashMap::new();

        // Top edge above the 100 px inset, bottom edge below 34% of the
        // viewport: intersects the band
        regions.insert("about".to_string(), region(90.0, 400.0));
        observer.evaluate(0.0, VIEWPORT, &regions);
        assert_eq!(engine.active_section(), "about");
    }

    #[test]
    fn test_section_below_band_is_not_active() {
        let engine = Arc::new(SectionEngine::new(registry()));
        let mut observer = VisibilityObserver::new(registry(), engine.clone());
        let mut regions = AHashMap::new();

        // Entirely below the band: top edge at 80% of the viewport height
        regions.insert("about".to_string(), region(0.8 * VIEWPORT, 1.5 * VIEWPORT));
        observer.evaluate(0.0, VIEWPORT, &regions);
        assert_eq!(engine.active_section(), "home");
    }

    #[test]
    fn test_entry_fires_on_edge_not_every_frame() {
        let engine = Arc::new(SectionEngine::new(registry()));
        let mut observer = VisibilityObserver::new(registry(), engine.clone());
        let regions = page_layout();

        // church-life sits in the band at this offset
        observer.evaluate(1500.0, VIEWPORT, &regions);
        assert_eq!(engine.active_section(), "church-life");

        // The user clicks back to about; church-life staying in the band
        // must not re-fire on the next frame
        engine.activate("about");
        observer.evaluate(1500.0, VIEWPORT, &regions);
        assert_eq!(engine.active_section(), "about");
    }

    #[test]
    fn test_missing_region_is_skipped() {
        let engine = Arc::new(SectionEngine::new(registry()));
        let mut observer = VisibilityObserver::new(registry(), engine.clone());
        let mut regions = AHashMap::new();

        // Only "about" is mounted; the other three resolve to nothing
        regions.insert("about".to_string(), region(120.0, 500.0));
        observer.evaluate(0.0, VIEWPORT, &regions);
        assert_eq!(engine.active_section(), "about");
    }

    #[test]
    fn test_detached_observer_never_mutates_state() {
        let engine = Arc::new(SectionEngine::new(registry()));
        let mut observer = VisibilityObserver::new(registry(), engine.clone());

        observer.detach();
        assert!(!observer.is_attached());

        observer.evaluate(1500.0, VIEWPORT, &page_layout());
        assert_eq!(engine.active_section(), "home");
    }

    #[test]
    fn test_scroll_then_click_scenario() {
        let engine = Arc::new(SectionEngine::new(registry()));
        let mut observer = VisibilityObserver::new(registry(), engine.clone());
        let regions = page_layout();

        assert_eq!(engine.active_section(), "home");

        // Scroll until church-life enters the band
        observer.evaluate(0.0, VIEWPORT, &regions);
        observer.evaluate(1500.0, VIEWPORT, &regions);
        assert_eq!(engine.active_section(), "church-life");

        // Click "contact": active immediately, scroll targets its top minus
        // the header clearance
        let request = engine
            .navigate_and_scroll("contact", &regions)
            .expect("contact is mounted");
        assert_eq!(engine.active_section(), "contact");
        assert_eq!(request.target_offset, 2400.0 - HEADER_CLEARANCE);

        // A stale band event from the pre-click position does not steal the
        // highlight during the scroll the click started
        engine.handle_event(NavEvent::SectionEnteredBand("church-life".to_string()));
        assert_eq!(engine.active_section(), "contact");

        // The scroll settles and the observer sees contact in the band
        observer.evaluate(request.target_offset, VIEWPORT, &regions);
        assert_eq!(engine.active_section(), "contact");
    }
}
