//! Active-section engine implementation

use super::{NavEvent, RegionResolver, ScrollBehavior, ScrollRequest, SectionSubscriber, HEADER_CLEARANCE};
use crate::sections::SectionRegistry;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::debug;

/// Engine state stored internally
#[derive(Debug, Clone)]
struct EngineState {
    active: String,
    /// Set on a click-driven activation. Lets the engine swallow one stale
    /// observer event that was already in flight for the pre-scroll
    /// position, so the clicked section stays authoritative.
    click_pending: Option<String>,
}

/// Single source of truth for which section is active.
///
/// Both click-driven navigation and the scroll observer go through this
/// engine; the rendering layer only reads from it.
pub struct SectionEngine {
    registry: SectionRegistry,
    state: Arc<RwLock<EngineState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn SectionSubscriber>>>>,
}

impl SectionEngine {
    /// Create an engine; the first registered section starts out active
    pub fn new(registry: SectionRegistry) -> Self {
        let active = registry.first().unwrap_or_default().to_string();
        Self {
            registry,
            state: Arc::new(RwLock::new(EngineState {
                active,
                click_pending: None,
            })),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Identifier of the currently active section
    pub fn active_section(&self) -> String {
        self.state.read().active.clone()
    }

    /// The registry this engine was built with
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Make `id` the active section.
    ///
    /// Unknown identifiers are a no-op (callers may hold stale references;
    /// that is not an error). Re-activating the current section leaves the
    /// state untouched and does not notify subscribers.
    pub fn activate(&self, id: &str) {
        if !self.registry.contains(id) {
            debug!(section = id, "ignoring activation of unregistered section");
            return;
        }

        {
            let mut state = self.state.write();
            if state.active == id {
                return;
            }
            state.active = id.to_string();
        }

        self.notify_subscribers();
    }

    /// Apply a navigation event
    pub fn handle_event(&self, event: NavEvent) {
        match event {
            NavEvent::NavClicked(id) => {
                if !self.registry.contains(&id) {
                    debug!(section = %id, "ignoring click on unregistered section");
                    return;
                }
                self.state.write().click_pending = Some(id.clone());
                self.activate(&id);
            }
            NavEvent::SectionEnteredBand(id) => {
                let stale = {
                    let mut state = self.state.write();
                    match state.click_pending.take() {
                        // A band event for the clicked section means the
                        // scroll settled; anything else is the one stale
                        // callback we tolerate after a click.
                        Some(clicked) => clicked != id,
                        None => false,
                    }
                };
                if !stale {
                    self.activate(&id);
                }
            }
            NavEvent::ViewportResized => {
                // Highlight geometry is derived per frame by the UI layer;
                // no engine state depends on the viewport size.
            }
        }
    }

    /// Activate `id` and compute the scroll that brings its region just
    /// below the fixed header.
    ///
    /// The activation write is visible before this returns; the caller
    /// starts the (non-blocking) scroll afterwards, so the nav highlight
    /// updates on the click itself rather than when the scroll settles.
    /// Returns `None` for unknown identifiers and unmounted regions.
    pub fn navigate_and_scroll(
        &self,
        id: &str,
        regions: &dyn RegionResolver,
    ) -> Option<ScrollRequest> {
        if !self.registry.contains(id) {
            debug!(section = id, "ignoring navigation to unregistered section");
            return None;
        }

        self.handle_event(NavEvent::NavClicked(id.to_string()));

        let region = regions.resolve_region(id)?;
        Some(ScrollRequest {
            target_offset: (region.top() - HEADER_CLEARANCE).max(0.0),
            behavior: ScrollBehavior::Smooth,
        })
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn SectionSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of the new active section
    fn notify_subscribers(&self) {
        let active = self.active_section();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_active_section_change(&active);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;
    use egui::{pos2, Rect};
    use parking_lot::Mutex;

    struct RecordingSubscriber {
        seen: Mutex<Vec<String>>,
    }

    impl RecordingSubscriber {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl SectionSubscriber for RecordingSubscriber {
        fn on_active_section_change(&self, id: &str) {
            self.seen.lock().push(id.to_string());
        }
    }

    fn engine() -> SectionEngine {
        SectionEngine::new(SectionRegistry::new([
            "home",
            "about",
            "church-life",
            "contact",
        ]))
    }

    fn region(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(1000.0, bottom))
    }

    #[test]
    fn test_first_section_active_by_default() {
        assert_eq!(engine().active_section(), "home");
    }

    #[test]
    fn test_active_section_always_registered() {
        let engine = engine();

        engine.activate("about");
        assert_eq!(engine.active_section(), "about");

        // Unknown identifiers never leak into the state
        engine.activate("blog");
        assert_eq!(engine.active_section(), "about");

        engine.handle_event(NavEvent::SectionEnteredBand("newsletter".to_string()));
        assert_eq!(engine.active_section(), "about");
    }

    #[test]
    fn test_activate_is_idempotent() {
        let engine = engine();
        let subscriber = RecordingSubscriber::new();
        engine.add_subscriber(subscriber.clone());

        engine.activate("home");
        engine.activate("home");

        assert_eq!(engine.active_section(), "home");
        assert!(subscriber.seen.lock().is_empty());
    }

    #[test]
    fn test_subscribers_notified_on_change() {
        let engine = engine();
        let subscriber = RecordingSubscriber::new();
        engine.add_subscriber(subscriber.clone());

        engine.activate("about");
        engine.activate("contact");

        assert_eq!(*subscriber.seen.lock(), ["about", "contact"]);
    }

    #[test]
    fn test_dropped_subscribers_are_skipped() {
        let engine = engine();
        let subscriber = RecordingSubscriber::new();
        engine.add_subscriber(subscriber.clone());
        drop(subscriber);

        // Must not panic or call through a dead reference
        engine.activate("about");
        assert_eq!(engine.active_section(), "about");
    }

    #[test]
    fn test_click_wins_over_stale_band_event() {
        let engine = engine();
        engine.handle_event(NavEvent::SectionEnteredBand("about".to_string()));
        assert_eq!(engine.active_section(), "about");

        // Click activates synchronously, before any scroll happens
        engine.handle_event(NavEvent::NavClicked("contact".to_string()));
        assert_eq!(engine.active_section(), "contact");

        // One observer callback already in flight for the old position is
        // swallowed
        engine.handle_event(NavEvent::SectionEnteredBand("about".to_string()));
        assert_eq!(engine.active_section(), "contact");

        // After that the observer is authoritative again
        engine.handle_event(NavEvent::SectionEnteredBand("home".to_string()));
        assert_eq!(engine.active_section(), "home");
    }

    #[test]
    fn test_band_event_for_clicked_section_rearms_observer() {
        let engine = engine();
        engine.handle_event(NavEvent::NavClicked("contact".to_string()));

        // The scroll settled on the clicked section
        engine.handle_event(NavEvent::SectionEnteredBand("contact".to_string()));
        assert_eq!(engine.active_section(), "contact");

        // Nothing left to swallow
        engine.handle_event(NavEvent::SectionEnteredBand("about".to_string()));
        assert_eq!(engine.active_section(), "about");
    }

    #[test]
    fn test_navigate_and_scroll_targets_header_clearance() {
        let engine = engine();
        let mut regions: AHashMap<String, Rect> = AHashMap::new();
        regions.insert("contact".to_string(), region(2400.0, 3200.0));

        let request = engine.navigate_and_scroll("contact", &regions);

        assert_eq!(engine.active_section(), "contact");
        let request = request.expect("mounted section should yield a scroll request");
        assert_eq!(request.target_offset, 2320.0);
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_navigate_and_scroll_clamps_at_top() {
        let engine = engine();
        let mut regions: AHashMap<String, Rect> = AHashMap::new();
        regions.insert("home".to_string(), region(0.0, 800.0));

        engine.activate("about");
        let request = engine.navigate_and_scroll("home", &regions);
        assert_eq!(request.map(|r| r.target_offset), Some(0.0));
    }

    #[test]
    fn test_navigate_to_unmounted_section_still_activates() {
        let engine = engine();
        let regions: AHashMap<String, Rect> = AHashMap::new();

        let request = engine.navigate_and_scroll("about", &regions);

        assert!(request.is_none());
        assert_eq!(engine.active_section(), "about");
    }

    #[test]
    fn test_navigate_to_unknown_section_is_noop() {
        let engine = engine();
        let regions: AHashMap<String, Rect> = AHashMap::new();

        assert!(engine.navigate_and_scroll("blog", &regions).is_none());
        assert_eq!(engine.active_section(), "home");
    }
}
