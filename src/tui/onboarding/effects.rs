//! Scroll Effects
//!
//! Step transitions don't scroll anything themselves. They queue a
//! `ScrollEffect` here, and whoever owns the screen flushes the queue into a
//! `ScrollTarget` once the new state has been painted. A scroll target's
//! position can depend on content that the same transition just revealed, so
//! flushing before the paint would aim at stale rows.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::types::Anchor;

/// Where the anchor row should end up in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlign {
    /// Anchor at the top, offset by the margin
    #[default]
    Start,
    /// Anchor in the vertical middle
    Center,
}

/// Options passed along with every scroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub align: ScrollAlign,
    /// Rows kept visible above the anchor when aligning to the start
    pub margin: u16,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            align: ScrollAlign::Start,
            margin: 1,
        }
    }
}

/// A pending request to bring an anchor into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEffect {
    pub anchor: Anchor,
    pub options: ScrollOptions,
}

/// Something that can scroll to a named anchor. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollTarget {
    fn scroll_to_anchor(&mut self, anchor: Anchor, options: ScrollOptions);
}

/// Ordered queue of scroll effects waiting for the next paint
#[derive(Debug, Default)]
pub struct EffectQueue {
    pending: VecDeque<ScrollEffect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: ScrollEffect) {
        tracing::trace!("[effects] queued scroll to {}", effect.anchor);
        self.pending.push_back(effect);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Anchors still waiting, oldest first
    pub fn anchors(&self) -> Vec<Anchor> {
        self.pending.iter().map(|e| e.anchor).collect()
    }

    /// Deliver every pending effect to `target` in the order they were queued.
    /// Returns how many were delivered.
    pub fn flush(&mut self, target: &mut dyn ScrollTarget) -> usize {
        let mut delivered = 0;
        while let Some(effect) = self.pending.pop_front() {
            target.scroll_to_anchor(effect.anchor, effect.options);
            delivered += 1;
        }
        delivered
    }
}

/// Scroll target that only records the anchors it was asked to show.
/// Used by the non-interactive `plan` command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EffectLog {
    pub anchors: Vec<Anchor>,
}

impl ScrollTarget for EffectLog {
    fn scroll_to_anchor(&mut self, anchor: Anchor, _options: ScrollOptions) {
        self.anchors.push(anchor);
    }
}
