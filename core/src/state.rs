use serde::{Deserialize, Serialize};

/// Coarse lifecycle of a game.
///
/// Valid transitions:
/// - NotStarted -> Playing (start)
/// - Playing -> Won (won)
/// - Playing -> Lost (lost)
/// - any -> NotStarted (reset)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No tile revealed yet
    #[default]
    NotStarted,
    /// At least one tile revealed, game not decided
    Playing,
    /// Every safe tile revealed
    Won,
    /// A mine was revealed
    Lost,
}

/// Events the board raises to move the lifecycle forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Start,
    Lost,
    Won,
    Reset,
}

impl GameState {
    pub const fn is_not_started(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Won or lost, nothing but a reset changes the board now.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn accepts_moves(self) -> bool {
        !self.is_terminal()
    }

    /// Looks up the transition table, `None` when the event does not apply.
    pub const fn next(self, event: GameEvent) -> Option<Self> {
        use GameEvent as E;
        use GameState::*;
        match (self, event) {
            (_, E::Reset) => Some(NotStarted),
            (NotStarted, E::Start) => Some(Playing),
            (Playing, E::Lost) => Some(Lost),
            (Playing, E::Won) => Some(Won),
            _ => None,
        }
    }

    /// Applies `event` in place, returning whether the state changed.
    pub fn apply(&mut self, event: GameEvent) -> bool {
        match self.next(event) {
            Some(next) if next != *self => {
                log::debug!("game state {:?} -> {:?} on {:?}", self, next, event);
                *self = next;
                true
            }
            Some(_) => false,
            None => {
                log::trace!("ignored {:?} while {:?}", event, self);
                false
            }
        }
    }
}
