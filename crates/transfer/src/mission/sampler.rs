//! Pull-based frame sampling for renderers and exporters.
//!
//! The sampler owns no rendering state: each frame is an independent query against the
//! immutable timeline.

use solar_core::vector::Vector3;

use super::{MissionTimeline, PhaseKind, TimelineError};

/// Positions of the spacecraft and both bodies at one frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    pub index: usize,
    pub t: f64,
    pub phase: PhaseKind,
    pub spacecraft: Vector3,
    pub origin: Vector3,
    pub destination: Vector3,
}

/// Iterator over evenly spaced frame times, both endpoints included.
#[derive(Debug, Clone)]
pub struct FrameSampler<'a> {
    timeline: &'a MissionTimeline,
    start: f64,
    end: f64,
    frames: usize,
    next: usize,
}

impl<'a> FrameSampler<'a> {
    pub fn new(timeline: &'a MissionTimeline, start: f64, end: f64, frames: usize) -> Self {
        Self {
            timeline,
            start,
            end,
            frames,
            next: 0,
        }
    }

    /// Time of frame `index`. A single frame sits at `start`.
    pub fn frame_time(&self, index: usize) -> f64 {
        frame_time(self.start, self.end, self.frames, index)
    }
}

/// `index`-th of `frames` evenly spaced times over `[start, end]`.
pub fn frame_time(start: f64, end: f64, frames: usize, index: usize) -> f64 {
    if frames <= 1 {
        return start;
    }
    if index + 1 == frames {
        // land exactly on the endpoint instead of a rounded neighbour
        return end;
    }
    start + (end - start) * index as f64 / (frames - 1) as f64
}

impl Iterator for FrameSampler<'_> {
    type Item = Result<FrameSample, TimelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.frames {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let t = self.frame_time(index);
        Some(self.timeline.locate(t).map(|(phase, spacecraft)| FrameSample {
            index,
            t,
            phase,
            spacecraft,
            origin: self.timeline.origin_position_at(t),
            destination: self.timeline.destination_position_at(t),
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frames.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSampler<'_> {}
