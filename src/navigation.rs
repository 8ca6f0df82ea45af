//! Overlay history for "back closes the overlay" behavior.
//!
//! Front-ends that show the settings panel, a photo detail, or a full-screen
//! lightbox on top of the gallery keep a [`NavStack`] and route the platform
//! back action to [`NavStack::back`], which closes only the topmost overlay.
//! A lightbox always sits on a photo detail, so backing out of it returns to
//! that detail before the gallery.

/// Something drawn over the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Full settings form on narrow screens.
    ConfigPanel,
    /// Detail view of one photo.
    PhotoDetail(u64),
    /// Full-screen image of the photo detail below it.
    Lightbox,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavStack {
    entries: Vec<Overlay>,
}

impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self) -> Option<Overlay> {
        self.entries.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Show `overlay` above everything else.
    ///
    /// Re-opening the overlay already on top does nothing, and a lightbox
    /// is only opened over a photo detail. Returns whether the stack changed.
    pub fn open(&mut self, overlay: Overlay) -> bool {
        if self.top() == Some(overlay) {
            return false;
        }
        if overlay == Overlay::Lightbox && !matches!(self.top(), Some(Overlay::PhotoDetail(_))) {
            return false;
        }
        self.entries.push(overlay);
        true
    }

    /// Close the topmost overlay.
    pub fn back(&mut self) -> Option<Overlay> {
        self.entries.pop()
    }

    /// Close `overlay` and everything opened above it.
    ///
    /// Returns the closed overlays, topmost first; empty if `overlay` is not
    /// open.
    pub fn close(&mut self, overlay: Overlay) -> Vec<Overlay> {
        match self.entries.iter().rposition(|&o| o == overlay) {
            Some(pos) => {
                let mut closed = self.entries.split_off(pos);
                closed.reverse();
                closed
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_closes_lightbox_before_detail() {
        let mut nav = NavStack::new();
        nav.open(Overlay::PhotoDetail(7));
        nav.open(Overlay::Lightbox);

        assert_eq!(nav.back(), Some(Overlay::Lightbox));
        assert_eq!(nav.top(), Some(Overlay::PhotoDetail(7)));
        assert_eq!(nav.back(), Some(Overlay::PhotoDetail(7)));
        assert!(nav.is_empty());
        assert_eq!(nav.back(), None);
    }

    #[test]
    fn reopening_top_is_noop() {
        let mut nav = NavStack::new();
        assert!(nav.open(Overlay::ConfigPanel));
        assert!(!nav.open(Overlay::ConfigPanel));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn lightbox_needs_detail_below() {
        let mut nav = NavStack::new();
        assert!(!nav.open(Overlay::Lightbox));
        nav.open(Overlay::ConfigPanel);
        assert!(!nav.open(Overlay::Lightbox));
        assert_eq!(nav.top(), Some(Overlay::ConfigPanel));
    }

    #[test]
    fn switching_photos_stacks_details() {
        let mut nav = NavStack::new();
        nav.open(Overlay::PhotoDetail(1));
        nav.open(Overlay::PhotoDetail(2));
        assert_eq!(nav.back(), Some(Overlay::PhotoDetail(2)));
        assert_eq!(nav.top(), Some(Overlay::PhotoDetail(1)));
    }

    #[test]
    fn close_removes_overlay_and_above() {
        let mut nav = NavStack::new();
        nav.open(Overlay::ConfigPanel);
        nav.open(Overlay::PhotoDetail(3));
        nav.open(Overlay::Lightbox);

        let closed = nav.close(Overlay::PhotoDetail(3));
        assert_eq!(closed, vec![Overlay::Lightbox, Overlay::PhotoDetail(3)]);
        assert_eq!(nav.top(), Some(Overlay::ConfigPanel));
    }

    #[test]
    fn close_missing_overlay_changes_nothing() {
        let mut nav = NavStack::new();
        nav.open(Overlay::ConfigPanel);
        assert!(nav.close(Overlay::Lightbox).is_empty());
        assert_eq!(nav.depth(), 1);
    }
}
