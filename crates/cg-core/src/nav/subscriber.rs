//! Active-section subscriber trait

/// Trait for components that need to respond to active-section changes
pub trait SectionSubscriber: Send + Sync {
    /// Called after the active section changed
    fn on_active_section_change(&self, id: &str);
}
