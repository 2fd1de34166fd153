//! Root theme marker side effect.
//!
//! The coordinator never touches a display surface directly. It is handed a
//! [`ThemeApplier`] at mount and calls it right after each committed change of
//! the dark-mode flag.

use std::collections::BTreeSet;

/// Class name marking the root as dark.
pub const DARK_CLASS: &str = "dark";

/// Applies the dark-mode flag to whatever acts as the document root.
pub trait ThemeApplier {
    /// Makes the root marker match `dark_mode`.
    fn apply(&mut self, dark_mode: bool);
}

impl<A: ThemeApplier + ?Sized> ThemeApplier for Box<A> {
    fn apply(&mut self, dark_mode: bool) {
        (**self).apply(dark_mode)
    }
}

impl<A: ThemeApplier + ?Sized> ThemeApplier for &mut A {
    fn apply(&mut self, dark_mode: bool) {
        (**self).apply(dark_mode)
    }
}

/// In-memory root element class list.
///
/// Headless stand-in for a document root: the `"dark"` class is present exactly
/// when the last applied flag was `true`. Also counts applications so callers
/// can observe when the effect ran.
#[derive(Debug, Clone, Default)]
pub struct RootClassList {
    classes: BTreeSet<String>,
    applications: usize,
}

impl RootClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the root carries `class`.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Returns true if the dark marker is present.
    pub fn is_dark(&self) -> bool {
        self.contains(DARK_CLASS)
    }

    /// Number of times the effect has run.
    pub fn applications(&self) -> usize {
        self.applications
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl ThemeApplier for RootClassList {
    fn apply(&mut self, dark_mode: bool) {
        if dark_mode {
            self.classes.insert(DARK_CLASS.to_string());
        } else {
            self.classes.remove(DARK_CLASS);
        }
        self.applications += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_toggle() {
        let mut root = RootClassList::new();
        assert!(!root.is_dark());

        root.apply(true);
        root.apply(true);
        assert!(root.is_dark());
        assert_eq!(root.classes().count(), 1);

        root.apply(false);
        assert!(!root.is_dark());
        assert_eq!(root.applications(), 3);
    }

    fn apply_via<A: ThemeApplier>(mut applier: A, dark_mode: bool) {
        applier.apply(dark_mode);
    }

    #[test]
    fn test_borrowed_applier_forwards() {
        let mut root = RootClassList::new();
        apply_via(&mut root, true);
        assert!(root.is_dark());

        apply_via(&mut root, false);
        assert!(!root.is_dark());
        assert_eq!(root.applications(), 2);
    }
}
