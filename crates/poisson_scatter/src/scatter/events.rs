//! Event types and sinks for observing scatter runs.
//!
//! This module defines [`ScatterEvent`] and a small set of sinks to emit or collect
//! events while a driver such as [`crate::scatter::DiskScatter::run_with_events`] or
//! [`crate::scatter::RectScatter::run_with_events`] executes.
use glam::Vec2;

use crate::region::Shape;

/// Describes events emitted during a scatter run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum ScatterEvent {
    /// Emitted once derived parameters are known, before sampling starts.
    RunStarted {
        /// Outline being filled.
        shape: Shape,
        /// Maximum number of points the run will accept.
        target_count: usize,
        /// Minimum spacing in the normalized unit square.
        min_distance: f32,
        /// Minimum spacing mapped to world units along x.
        world_min_distance: f32,
    },

    /// Emitted when the seed point was found.
    SeedPlaced {
        /// Seed position in the normalized unit square.
        position: Vec2,
        /// Number of random draws it took.
        attempts: usize,
    },

    /// Emitted each time the accepted count reaches a multiple of 100.
    Progress {
        /// Points accepted so far.
        accepted: usize,
    },

    /// Emitted when sampling stops.
    RunFinished {
        /// Points accepted in total.
        accepted: usize,
        /// Maximum number of points the run would accept.
        target_count: usize,
        /// True if the active list ran dry before the target was reached.
        exhausted: bool,
    },
}

/// A generic event sink that accepts [`ScatterEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: ScatterEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: ScatterEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(ScatterEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(ScatterEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(ScatterEvent),
{
    #[inline]
    fn send(&mut self, event: ScatterEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<ScatterEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<ScatterEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[ScatterEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: ScatterEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(ScatterEvent::Progress { accepted: 100 });
        sink.send(ScatterEvent::Progress { accepted: 200 });
        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.as_slice()[1],
            ScatterEvent::Progress { accepted: 200 }
        );
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(ScatterEvent::Progress { accepted: 100 });
        sink.send(ScatterEvent::RunFinished {
            accepted: 150,
            target_count: 200,
            exhausted: true,
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn unit_sink_discards_events() {
        let sink: &mut dyn EventSink = &mut ();
        sink.send(ScatterEvent::Progress { accepted: 100 });
    }
}
