//! Hazard container: a fixed ring of slots with a moving test position.
//!
//! Models a mechanism that always cycles after every test: [`HazardContainer::test`]
//! couples slot inspection with an unconditional positional advance, so a caller
//! cannot inspect a slot without moving the mechanism on to the next one.

use rand::rngs::SmallRng;
use rand::Rng;

/// Outcome of testing the slot under the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    /// The slot held the hazard; it has been disarmed.
    Triggered,
    /// The slot was empty.
    Empty,
}

/// Fixed-size ring of slots, at most one of which holds the hazard.
///
/// Created fresh for each round and dropped when the round ends.
#[derive(Debug)]
pub struct HazardContainer {
    slots: Vec<bool>,
    position: usize,
}

impl HazardContainer {
    /// Create an all-empty container with `size` slots, position 0.
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 1, "container needs at least one slot");
        Self {
            slots: vec![false; size],
            position: 0,
        }
    }

    /// Number of slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Current position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Place the hazard in the slot under the current position.
    ///
    /// At most one slot may be armed at a time; arming again before the
    /// hazard has been triggered or disarmed violates that invariant.
    pub fn arm(&mut self) {
        debug_assert!(
            !self.slots.iter().any(|&armed| armed),
            "a hazard is already armed"
        );
        self.slots[self.position] = true;
    }

    /// Clear the slot under the current position. No-op when empty.
    pub fn disarm(&mut self) {
        self.slots[self.position] = false;
    }

    /// Rotate the position forward by one slot, wrapping at the end.
    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.slots.len();
    }

    /// Move the position to a uniformly random slot. Independent of the
    /// prior position, so it may land on the same slot again.
    pub fn randomize(&mut self, rng: &mut SmallRng) {
        self.position = rng.random_range(0..self.slots.len());
    }

    /// Test the slot under the current position, then advance.
    ///
    /// The advance happens on every call, hit or miss: testing a slot is
    /// what moves the mechanism to the next one.
    pub fn test(&mut self) -> TestOutcome {
        if self.slots[self.position] {
            self.disarm();
            self.advance();
            TestOutcome::Triggered
        } else {
            self.advance();
            TestOutcome::Empty
        }
    }
}
