/// The element holding keyboard focus when a key event arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTarget {
    pub tag_name: Option<String>,
    pub content_editable: bool,
}

impl FocusTarget {
    /// Focus on a plain element, or on the document itself when `tag` is empty.
    #[must_use]
    pub fn element(tag: &str) -> Self {
        Self {
            tag_name: (!tag.is_empty()).then(|| tag.to_ascii_lowercase()),
            content_editable: false,
        }
    }

    #[must_use]
    pub fn editable(tag: &str) -> Self {
        Self {
            content_editable: true,
            ..Self::element(tag)
        }
    }

    /// Inputs, textareas and content-editable regions own the keyboard.
    #[must_use]
    pub fn is_text_entry(&self) -> bool {
        self.content_editable
            || self
                .tag_name
                .as_deref()
                .is_some_and(|tag| tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea"))
    }
}

/// Modifier keys held with a key press. Shift does not count: it only
/// changes the letter's case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    #[must_use]
    pub const fn any(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// Single-letter keyboard shortcut, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    key: char,
}

impl Shortcut {
    #[must_use]
    pub const fn new(key: char) -> Self {
        Self { key }
    }

    #[must_use]
    pub const fn key(self) -> char {
        self.key
    }

    /// `key` is a `KeyboardEvent.key` value, pressed without modifiers.
    #[must_use]
    pub fn matches(self, key: &str, focus: &FocusTarget) -> bool {
        self.matches_chord(key, Modifiers::default(), focus)
    }

    /// Chords such as Ctrl+H belong to the browser and never match.
    #[must_use]
    pub fn matches_chord(self, key: &str, modifiers: Modifiers, focus: &FocusTarget) -> bool {
        if modifiers.any() || focus.is_text_entry() {
            return false;
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.eq_ignore_ascii_case(&self.key),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_either_case_outside_inputs() {
        let h = Shortcut::new('h');
        let body = FocusTarget::element("BODY");
        assert!(h.matches("h", &body));
        assert!(h.matches("H", &body));
        assert!(!h.matches("j", &body));
        assert!(!h.matches("Home", &body));
        assert!(h.matches("h", &FocusTarget::default()));
    }

    #[test]
    fn suppressed_while_typing() {
        let h = Shortcut::new('h');
        assert!(!h.matches("h", &FocusTarget::element("INPUT")));
        assert!(!h.matches("H", &FocusTarget::element("textarea")));
        assert!(!h.matches("h", &FocusTarget::editable("div")));
    }

    #[test]
    fn browser_chords_are_left_alone() {
        let h = Shortcut::new('h');
        let body = FocusTarget::element("body");
        for modifiers in [
            Modifiers { ctrl: true, ..Modifiers::default() },
            Modifiers { meta: true, ..Modifiers::default() },
            Modifiers { alt: true, ..Modifiers::default() },
        ] {
            assert!(!h.matches_chord("h", modifiers, &body));
        }
        assert!(h.matches_chord("H", Modifiers::default(), &body));
    }
}
