use crate::{
    CoreResult,
    command::Command,
    player::{PlayerState, Transition, apply},
};

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, instrument, warn};

/// Owner of the canonical player state.
///
/// # Thread Safety
///
/// All reads and writes go through one mutex. [`PlayerStore::apply_command`]
/// computes and commits the transition while holding it, so concurrent
/// callers are serialized and a snapshot never sees half of a transition.
/// The lock is never held across anything slower than the transition itself;
/// gesture classification must finish before `apply_command` is called.
#[derive(Debug)]
pub struct PlayerStore {
    state: Mutex<PlayerState>,
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new(PlayerState::default())
    }
}

impl PlayerStore {
    /// Creates a store holding `initial`.
    pub fn new(initial: PlayerState) -> Self {
        info!(current_video = %initial.current_video(), "Player state initialized");

        Self {
            state: Mutex::new(initial),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PlayerState {
        self.lock().clone()
    }

    /// Apply `command` atomically and return the resulting transition.
    ///
    /// # Errors
    ///
    /// Returns the state machine's validation error; the stored state is
    /// unchanged in that case.
    #[track_caller]
    #[instrument(skip(self, command), fields(command = %command))]
    pub fn apply_command(&self, command: &Command) -> CoreResult<Transition> {
        let mut state = self.lock();

        let transition = apply(&state, command)?;
        *state = transition.state.clone();

        debug!(effect = ?transition.effect, "Command applied");

        Ok(transition)
    }

    fn lock(&self) -> MutexGuard<'_, PlayerState> {
        // A poisoned lock still holds a committed state: transitions are
        // computed on a copy and written back in one assignment.
        self.state.lock().unwrap_or_else(|e| {
            warn!("Player state lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}
