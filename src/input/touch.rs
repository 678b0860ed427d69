//! Multi-touch snapshots.
//!
//! The platform reports touches as a stream of start/move/end events. The
//! controls never see that stream: once per frame the [`TouchTracker`]
//! freezes it into an immutable [`TouchFrame`], and every control works off
//! that snapshot alone.

use glam::Vec2;

/// Stable identity of one physical contact for as long as it stays down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FingerId(pub u64);

/// Finger id used when the left mouse button stands in for a touch.
pub const MOUSE_FINGER: FingerId = FingerId(u64::MAX);

/// One active contact as seen in a single frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: FingerId,
    /// Position in logical game coordinates.
    pub position: Vec2,
    /// True only in the first frame this finger appears.
    pub pressed: bool,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id: FingerId(id), position: Vec2::new(x, y), pressed: false }
    }

    /// Same point, flagged as a fresh press.
    pub fn pressed(mut self) -> Self {
        self.pressed = true;
        self
    }
}

/// Immutable per-frame snapshot of every finger that is down.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchFrame {
    points: Vec<TouchPoint>,
}

impl TouchFrame {
    pub fn new(points: Vec<TouchPoint>) -> Self {
        Self { points }
    }

    /// Build the next frame from raw `(id, position)` pairs, marking fingers
    /// that were absent from `previous` as presses.
    pub fn from_positions(previous: &TouchFrame, positions: &[(FingerId, Vec2)]) -> Self {
        let points = positions
            .iter()
            .map(|&(id, position)| TouchPoint {
                id,
                position,
                pressed: !previous.contains(id),
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[TouchPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn contains(&self, id: FingerId) -> bool {
        self.points.iter().any(|p| p.id == id)
    }

    pub fn get(&self, id: FingerId) -> Option<&TouchPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TouchPoint> {
        self.points.iter()
    }
}

#[derive(Clone, Debug)]
struct TrackedTouch {
    id: FingerId,
    position: Vec2,
    /// Lifted before any snapshot saw it; kept for exactly one frame so a
    /// quick tap between two frames still registers.
    lifted: bool,
    /// Started again under an id the last snapshot already showed; the next
    /// snapshot reports it as a new press.
    repressed: bool,
}

/// Accumulates raw platform touch events between frames.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    active: Vec<TrackedTouch>,
    previous: TouchFrame,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_started(&mut self, id: FingerId, position: Vec2) {
        match self.active.iter_mut().find(|t| t.id == id) {
            Some(t) => {
                t.position = position;
                t.lifted = false;
            }
            None => self.active.push(TrackedTouch {
                id,
                position,
                lifted: false,
                repressed: self.previous.contains(id),
            }),
        }
    }

    pub fn touch_moved(&mut self, id: FingerId, position: Vec2) {
        if let Some(t) = self.active.iter_mut().find(|t| t.id == id) {
            t.position = position;
        }
    }

    /// Lift (or cancel) a finger.
    pub fn touch_ended(&mut self, id: FingerId) {
        let Some(i) = self.active.iter().position(|t| t.id == id) else { return };
        let unseen = self.active[i].repressed || !self.previous.contains(id);
        if unseen {
            self.active[i].lifted = true;
        } else {
            self.active.remove(i);
        }
    }

    /// Drop every finger at once (focus loss, suspend). The next snapshot is
    /// empty, so every control sees its finger released.
    pub fn cancel_all(&mut self) {
        self.active.clear();
    }

    /// Freeze the current contacts into this frame's snapshot.
    pub fn snapshot(&mut self) -> TouchFrame {
        let positions: Vec<(FingerId, Vec2)> =
            self.active.iter().map(|t| (t.id, t.position)).collect();
        let mut frame = TouchFrame::from_positions(&self.previous, &positions);
        for (point, tracked) in frame.points.iter_mut().zip(&self.active) {
            point.pressed |= tracked.repressed;
        }
        self.active.retain(|t| !t.lifted);
        for t in &mut self.active {
            t.repressed = false;
        }
        self.previous = frame.clone();
        frame
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
