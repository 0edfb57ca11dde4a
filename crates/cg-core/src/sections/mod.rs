use serde::{Deserialize, Serialize};

/// Fixed, ordered set of navigable page sections.
///
/// The list is established once at startup and never edited afterwards;
/// everything that refers to a section does so by its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRegistry {
    ids: Vec<String>,
}

impl SectionRegistry {
    /// Create a registry from an ordered list of identifiers
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `id` names a registered section
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// First section in page order (the default active section)
    pub fn first(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    /// Iterate identifiers in page order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_lookup() {
        let registry = SectionRegistry::new(["home", "about", "church-life", "contact"]);

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.first(), Some("home"));
        assert!(registry.contains("church-life"));
        assert!(!registry.contains("blog"));

        let ids: Vec<&str> = registry.iter().collect();
        assert_eq!(ids, ["home", "about", "church-life", "contact"]);
    }
}
