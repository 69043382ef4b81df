//! Light/dark theme selection.
//!
//! The page keeps a plain `dark_mode` boolean. Components convert it into a
//! [`Theme`] and pick their own class names from it; nothing relies on styles
//! inherited from an ancestor.

/// One of the two named visual palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class applied to the root container. The `.dark` selector switches the
    /// gradient variables in [`crate::tokens::stylesheet`].
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    /// Pick between a dark-mode and a light-mode value.
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }

    /// ARIA label for the toggle button: it names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        self.pick("Switch to light mode", "Switch to dark mode")
    }
}

impl From<bool> for Theme {
    fn from(dark_mode: bool) -> Self {
        Theme::from_dark_mode(dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark_mode() {
        assert!(Theme::from_dark_mode(true).is_dark());
        assert!(!Theme::from_dark_mode(false).is_dark());
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_root_class() {
        assert_eq!(Theme::from(true).root_class(), "dark");
        assert_eq!(Theme::from(false).root_class(), "");
    }

    #[test]
    fn test_pick_and_label() {
        assert_eq!(Theme::Dark.pick("sun", "moon"), "sun");
        assert_eq!(Theme::Light.pick("sun", "moon"), "moon");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
    }
}
