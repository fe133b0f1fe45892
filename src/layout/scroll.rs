//! Scroll synchronization between the timeline surface and its peers.

/// Keeps one authoritative scroll offset and mirrors it into a scrollable
/// surface without re-entrant updates.
///
/// Two directions of flow, never looping: a user scroll on the surface is
/// [`observe`](Self::observe)d and becomes the authoritative value; a
/// programmatic change ([`scroll_to`](Self::scroll_to)) is written to the
/// surface only when [`pending_write`](Self::pending_write) reports that
/// the native offset actually differs, so the read-back of a write never
/// triggers a second write.
///
/// Offsets are direction-agnostic: the scrolling surface is always treated
/// as left-to-right. Under right-to-left layout only the frozen panel's
/// visual side flips (see [`panel_margins`]).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSynchronizer {
    scroll: f32,
}

impl ScrollSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The authoritative offset.
    pub fn offset(&self) -> f32 {
        self.scroll
    }

    /// Record an offset observed from user scrolling on the surface.
    /// Returns true when the authoritative value changed.
    pub fn observe(&mut self, native: f32) -> bool {
        if native != self.scroll {
            self.scroll = native;
            true
        } else {
            false
        }
    }

    /// Programmatic navigation: move the authoritative offset.
    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll = offset;
    }

    /// The offset the surface must be set to, or `None` when it is already
    /// in sync.
    pub fn pending_write(&self, native: f32) -> Option<f32> {
        (native != self.scroll).then_some(self.scroll)
    }
}

/// Margins `(left, right)` reserving room for the frozen task-list panel
/// beside the scrolling surface; the occupied side flips under RTL.
pub fn panel_margins(task_list_width: f32, rtl: bool) -> (f32, f32) {
    if rtl {
        (0.0, task_list_width)
    } else {
        (task_list_width, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Programmatic move to 200 while the surface sits at 150: exactly one
    // write, and the read-back of that write must not trigger another.
    #[test]
    fn programmatic_scroll_writes_once() {
        let mut sync = ScrollSynchronizer::new();
        sync.observe(150.0);
        sync.scroll_to(200.0);

        assert_eq!(sync.pending_write(150.0), Some(200.0));
        // Surface now reports the written value back.
        assert_eq!(sync.pending_write(200.0), None);
    }

    #[test]
    fn user_scroll_becomes_authoritative_without_a_write() {
        let mut sync = ScrollSynchronizer::new();
        assert!(sync.observe(80.0));
        assert_eq!(sync.offset(), 80.0);
        assert_eq!(sync.pending_write(80.0), None);
        // Re-reporting the same offset is not a change.
        assert!(!sync.observe(80.0));
    }

    #[test]
    fn frozen_panel_side_flips_under_rtl() {
        assert_eq!(panel_margins(240.0, false), (240.0, 0.0));
        assert_eq!(panel_margins(240.0, true), (0.0, 240.0));
    }
}
