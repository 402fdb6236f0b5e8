//! Viewport
//!
//! Scroll position over the rendered wizard document. The renderer reports
//! where each anchor landed on every paint; scroll effects are resolved
//! against those rows.

use super::onboarding::{Anchor, ScrollAlign, ScrollOptions, ScrollTarget};

/// Row of each anchor in the rendered document. Hidden steps have no row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorMap {
    rows: [Option<usize>; Anchor::COUNT],
}

impl AnchorMap {
    pub fn set(&mut self, anchor: Anchor, row: usize) {
        self.rows[anchor.slot()] = Some(row);
    }

    pub fn get(&self, anchor: Anchor) -> Option<usize> {
        self.rows[anchor.slot()]
    }
}

#[derive(Debug, Default)]
pub struct Viewport {
    offset: usize,
    anchors: AnchorMap,
    content_rows: usize,
    visible_rows: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// First document row shown
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }

    /// Record the layout of the frame being painted and keep the offset in
    /// range for it.
    pub fn update_layout(&mut self, anchors: AnchorMap, content_rows: usize, visible_rows: usize) {
        self.anchors = anchors;
        self.content_rows = content_rows;
        self.visible_rows = visible_rows;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn max_offset(&self) -> usize {
        self.content_rows.saturating_sub(self.visible_rows)
    }

    /// Manual scrolling (PageUp/PageDown, mouse wheel)
    pub fn scroll_by(&mut self, delta: isize) {
        let next = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.offset = next.min(self.max_offset());
    }

    pub fn page_rows(&self) -> usize {
        self.visible_rows.saturating_sub(1).max(1)
    }
}

impl ScrollTarget for Viewport {
    fn scroll_to_anchor(&mut self, anchor: Anchor, options: ScrollOptions) {
        let Some(row) = self.anchors.get(anchor) else {
            tracing::debug!("[viewport] anchor {} not on screen, ignoring scroll", anchor);
            return;
        };

        let target = match options.align {
            ScrollAlign::Start => row.saturating_sub(options.margin as usize),
            ScrollAlign::Center => row.saturating_sub(self.visible_rows / 2),
        };
        self.offset = target.min(self.max_offset());
        tracing::trace!("[viewport] scrolled to {} (row {}) -> offset {}", anchor, row, self.offset);
    }
}
