//! Endless ground strip.
//!
//! A FIFO of fixed-width segments covers the viewport plus lookahead. When
//! the leftmost segment scrolls fully behind the camera it is moved to the
//! tail in O(1) instead of allocating new ground.

use super::types::Segment;
use crate::constants::*;
use rand::Rng;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Terrain {
    segments: VecDeque<Segment>,
}

impl Terrain {
    /// Build the initial strip: contiguous segments from x=0 covering
    /// `LEVEL_WIDTH`, each with a random visual variant.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let segments = (0..SEGMENT_COUNT)
            .map(|col| Segment {
                left: GROUND_WIDTH * col as f64,
                variant: rng.gen_range(1..=2),
            })
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Leftmost covered x.
    pub fn left_extent(&self) -> f64 {
        self.segments.front().map_or(0.0, |s| s.left)
    }

    /// Rightmost covered x.
    pub fn right_extent(&self) -> f64 {
        self.segments.back().map_or(0.0, |s| s.right())
    }

    /// True if the strip covers the whole closed span.
    pub fn covers(&self, left: f64, right: f64) -> bool {
        // Segments are contiguous by construction, so span bounds suffice.
        self.left_extent() <= left && right <= self.right_extent()
    }

    /// True if some segment's band lies under any part of the x span.
    pub fn supports(&self, left: f64, right: f64) -> bool {
        self.segments
            .iter()
            .any(|s| s.left < right && left < s.right())
    }

    /// Recycle check, run once per frame: if the leftmost segment is fully
    /// behind the camera lookahead, move it to the tail to extend the
    /// strip. Returns the newly exposed span for an obstacle placement
    /// pass.
    pub fn recycle(&mut self, camera_lookahead: f64) -> Option<(f64, f64)> {
        let behind = self
            .segments
            .front()
            .is_some_and(|s| s.right() < camera_lookahead);
        if !behind {
            return None;
        }

        let mut segment = self.segments.pop_front()?;
        segment.left = self.right_extent();
        let span = (segment.left, segment.right());
        self.segments.push_back(segment);
        Some(span)
    }
}
