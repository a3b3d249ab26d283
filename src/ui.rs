//! Text reveal shown once the relic has surfaced

/// One-shot reveal notification target
pub trait TextReveal {
    fn show(&mut self);
}

/// A hidden-by-default text element
#[derive(Debug, Clone, Default)]
pub struct RevealText {
    text: String,
    visible: bool,
}

impl RevealText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: false,
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Replace the text, then show it
    pub fn set_and_show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.show();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextReveal for RevealText {
    fn show(&mut self) {
        self.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let text = RevealText::new("The relic awakens");
        assert!(!text.is_visible());
        assert_eq!(text.text(), "The relic awakens");
    }

    #[test]
    fn test_show_hide_toggle() {
        let mut text = RevealText::default();
        text.show();
        assert!(text.is_visible());
        text.toggle();
        assert!(!text.is_visible());
        text.toggle();
        assert!(text.is_visible());
        text.hide();
        assert!(!text.is_visible());
    }

    #[test]
    fn test_set_and_show() {
        let mut text = RevealText::new("old");
        text.set_and_show("new");
        assert!(text.is_visible());
        assert_eq!(text.text(), "new");
    }
}
