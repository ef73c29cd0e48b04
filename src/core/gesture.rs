// CarCare - core/gesture.rs
//
// Horizontal swipe classification for the mobile sidebar.
//
// Only the horizontal axis is examined: a diagonal swipe whose horizontal
// travel clears the threshold still counts. Opening swipes must begin near
// the left edge so ordinary content pans are not mistaken for a sidebar
// gesture; closing swipes may begin anywhere.

use crate::util::constants::{SWIPE_EDGE_ZONE, SWIPE_THRESHOLD};

/// What a completed swipe is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Left-to-right swipe starting near the left edge.
    Open,
    /// Right-to-left swipe of sufficient travel.
    Close,
}

/// Classify a completed swipe from its start and end screen-x coordinates.
///
/// Returns `None` when the horizontal travel does not clear
/// `SWIPE_THRESHOLD`, or when an opening-direction swipe started outside
/// the left-edge zone.
pub fn classify(start_x: f32, end_x: f32) -> Option<SwipeIntent> {
    let delta = end_x - start_x;
    if delta > SWIPE_THRESHOLD && start_x < SWIPE_EDGE_ZONE {
        Some(SwipeIntent::Open)
    } else if delta < -SWIPE_THRESHOLD {
        Some(SwipeIntent::Close)
    } else {
        None
    }
}

/// Tracks an in-flight touch so its start and end coordinates can be paired.
///
/// A second `begin` before an `end` replaces the recorded start (matching
/// how a new touch-start overwrites the previous one); an `end` without a
/// recorded start yields nothing.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the horizontal coordinate of a touch start.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Complete the touch, returning `(start_x, end_x)` when a start was
    /// recorded. Resets the tracker either way.
    pub fn end(&mut self, x: f32) -> Option<(f32, f32)> {
        self.start_x.take().map(|start| (start, x))
    }

    /// Abandon any in-flight touch (e.g. the platform cancelled it).
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Edge-start swipe exceeding the threshold asks to open.
    #[test]
    fn test_edge_swipe_right_opens() {
        assert_eq!(classify(30.0, 150.0), Some(SwipeIntent::Open));
    }

    /// The same travel starting outside the edge zone is ignored.
    #[test]
    fn test_swipe_right_outside_edge_zone_is_ignored() {
        assert_eq!(classify(60.0, 180.0), None);
    }

    /// Right-to-left travel exceeding the threshold asks to close,
    /// regardless of where it started.
    #[test]
    fn test_swipe_left_closes() {
        assert_eq!(classify(500.0, 400.0), Some(SwipeIntent::Close));
    }

    /// Travel at or below the threshold is ignored in both directions.
    #[test]
    fn test_sub_threshold_swipes_are_ignored() {
        assert_eq!(classify(10.0, 80.0), None); // +70, not strictly over
        assert_eq!(classify(300.0, 230.0), None); // -70
        assert_eq!(classify(20.0, 60.0), None);
        assert_eq!(classify(120.0, 90.0), None);
    }

    /// Tracker pairs a begin with the following end, then resets.
    #[test]
    fn test_tracker_pairs_begin_and_end() {
        let mut t = SwipeTracker::new();
        t.begin(30.0);
        assert_eq!(t.end(150.0), Some((30.0, 150.0)));
        assert_eq!(t.end(200.0), None);
    }

    /// A new begin replaces the previous one; cancel discards the touch.
    #[test]
    fn test_tracker_replace_and_cancel() {
        let mut t = SwipeTracker::new();
        t.begin(10.0);
        t.begin(40.0);
        assert_eq!(t.end(160.0), Some((40.0, 160.0)));

        t.begin(10.0);
        t.cancel();
        assert_eq!(t.end(300.0), None);
    }
}
