//! One round of the game: arm, randomize, then test until the hazard fires.
//!
//! A round is a two-state machine: it awaits a result while tests come up
//! empty and is done the moment the hazard triggers. Termination is
//! structural, not checked at runtime: every [`HazardContainer::test`] call
//! advances the container by exactly one slot and exactly one slot is armed,
//! so the hazard is reached within `container_size` tests.
//!
//! [`HazardContainer::test`]: crate::container::HazardContainer::test

use rand::rngs::SmallRng;

use crate::config::SimConfig;
use crate::container::{HazardContainer, TestOutcome};

/// Play one round and return the index of the participant who triggered the
/// hazard.
///
/// The container is built fresh, armed, and only then randomized, so the
/// armed slot's absolute index never matters; only its offset from the
/// randomized position does.
///
/// `turn_cursor` is the turn state owned by the trial. Unless
/// `cfg.continuous_turns` is set it is reset to participant 0 at round start;
/// either way it advances modulo the participant count on every empty test
/// and is left pointing at the winner.
pub fn play_round(cfg: &SimConfig, turn_cursor: &mut usize, rng: &mut SmallRng) -> usize {
    let mut container = HazardContainer::new(cfg.container_size);
    container.arm();
    container.randomize(rng);

    if !cfg.continuous_turns {
        *turn_cursor = 0;
    }

    // Turn order and container position are decoupled: the cursor steps
    // modulo the participant count while the position cycles (or jumps,
    // with respin) modulo the slot count.
    while container.test() == TestOutcome::Empty {
        *turn_cursor = (*turn_cursor + 1) % cfg.participants;
        if cfg.respin_every_test {
            container.randomize(rng);
        }
    }

    *turn_cursor
}
