//! Name-to-color registry.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Registered players: each name maps to exactly one color.
///
/// Multiple names may share a color; nothing checks exclusivity. Iteration
/// follows insertion order, and re-registering a name overwrites its color
/// without moving it, so `first_of_color` is deterministic for the life of
/// the registry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    colors: FxHashMap<String, Color>,
    /// Names in first-registration order.
    order: Vec<String>,
}

impl PlayerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the color mapping for `name`.
    pub fn register(&mut self, name: impl Into<String>, color: Color) {
        let name = name.into();
        if self.colors.insert(name.clone(), color).is_none() {
            self.order.push(name);
        }
    }

    /// Color assigned to `name`, if registered.
    #[must_use]
    pub fn color_of(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// First registered player of `color`, in insertion order.
    #[must_use]
    pub fn first_of_color(&self, color: Color) -> Option<&str> {
        self.order
            .iter()
            .find(|name| self.colors.get(name.as_str()) == Some(&color))
            .map(String::as_str)
    }

    /// Iterate over `(name, color)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.order
            .iter()
            .filter_map(|name| Some((name.as_str(), *self.colors.get(name.as_str())?)))
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nobody has registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PlayerRegistry::new();
        registry.register("Ada", Color::Black);
        registry.register("Bram", Color::White);

        assert_eq!(registry.color_of("Ada"), Some(Color::Black));
        assert_eq!(registry.color_of("Bram"), Some(Color::White));
        assert_eq!(registry.color_of("Nobody"), None);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_reregistration_overwrites_color_in_place() {
        let mut registry = PlayerRegistry::new();
        registry.register("Ada", Color::Black);
        registry.register("Bram", Color::Black);
        registry.register("Ada", Color::White);

        assert_eq!(registry.color_of("Ada"), Some(Color::White));
        assert_eq!(registry.len(), 2);
        // Ada keeps her original slot in iteration order.
        let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Ada", "Bram"]);
    }

    #[test]
    fn test_first_of_color_follows_insertion_order() {
        let mut registry = PlayerRegistry::new();
        registry.register("Ada", Color::Black);
        registry.register("Eve", Color::Black);
        registry.register("Bram", Color::White);

        assert_eq!(registry.first_of_color(Color::Black), Some("Ada"));
        assert_eq!(registry.first_of_color(Color::White), Some("Bram"));
    }

    #[test]
    fn test_first_of_color_missing() {
        let mut registry = PlayerRegistry::new();
        registry.register("Ada", Color::Black);

        assert_eq!(registry.first_of_color(Color::White), None);
        assert_eq!(PlayerRegistry::new().first_of_color(Color::Black), None);
        assert!(PlayerRegistry::new().is_empty());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_shared_color_is_allowed() {
        let mut registry = PlayerRegistry::new();
        registry.register("Ada", Color::Black);
        registry.register("Eve", Color::Black);

        assert_eq!(registry.color_of("Ada"), Some(Color::Black));
        assert_eq!(registry.color_of("Eve"), Some(Color::Black));
    }
}
