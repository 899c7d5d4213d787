//! Game aggregate: lifecycle state machine over the board/rules engine.
//!
//! Status transitions are monotonic: Waiting -> Active -> Finished. Every
//! failing operation leaves the aggregate untouched; callers persist the
//! mutated aggregate through the repos layer, which enforces at-most-one
//! in-flight mutation per game id via optimistic locking.

use time::OffsetDateTime;

use crate::domain::board::{Board, Mark};
use crate::domain::coordinate::Coordinate;
use crate::errors::domain::{DomainError, RuleViolation};

pub const PLAYER_SLOTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Waiting,
    Active,
    Finished,
}

/// A player slot. `id` is the external user identity; `mark` stays unset
/// until the game starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub mark: Option<Mark>,
    pub is_active: bool,
}

impl Player {
    fn vacant() -> Self {
        Self {
            id: String::new(),
            mark: None,
            is_active: false,
        }
    }

    pub fn is_occupied(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Aggregate root. Slot 0 is always the creator; slot 1 is filled on join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub board: Board,
    pub players: [Player; PLAYER_SLOTS],
    pub status: GameStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Game {
    /// New game in Waiting: the creator occupies slot 0, no marks assigned.
    pub fn new(id: impl Into<String>, creator_id: impl Into<String>, now: OffsetDateTime) -> Self {
        Self {
            id: id.into(),
            board: Board::empty(),
            players: [
                Player {
                    id: creator_id.into(),
                    mark: None,
                    is_active: false,
                },
                Player::vacant(),
            ],
            status: GameStatus::Waiting,
            created_at: now,
            updated_at: now,
        }
    }

    /// Fill slot 1 and start the game.
    ///
    /// `creator_starts` decides which of the two mark/first-turn assignments
    /// applies; callers obtain it from an unbiased coin flip.
    pub fn join(
        &mut self,
        joiner_id: impl Into<String>,
        creator_starts: bool,
        now: OffsetDateTime,
    ) -> Result<(), DomainError> {
        if self.status != GameStatus::Waiting {
            return Err(DomainError::rule(RuleViolation::CannotJoin));
        }
        let joiner_id = joiner_id.into();
        if self.players[0].id == joiner_id {
            return Err(DomainError::rule(RuleViolation::AlreadyInGame));
        }

        self.players[1] = Player {
            id: joiner_id,
            mark: None,
            is_active: false,
        };
        let starter = usize::from(!creator_starts);
        self.players[starter].mark = Some(Mark::X);
        self.players[starter].is_active = true;
        self.players[1 - starter].mark = Some(Mark::O);
        self.status = GameStatus::Active;
        self.updated_at = now;
        Ok(())
    }

    /// Apply one move by `player_id` at `coord`.
    ///
    /// On success the cell is marked and either the game finishes (a line is
    /// complete or the board is full) or the active flag flips to the other
    /// slot. On any failure the aggregate is unchanged.
    pub fn make_move(
        &mut self,
        player_id: &str,
        coord: Coordinate,
        now: OffsetDateTime,
    ) -> Result<(), DomainError> {
        match self.status {
            GameStatus::Finished => return Err(DomainError::rule(RuleViolation::GameFinished)),
            GameStatus::Waiting => return Err(DomainError::rule(RuleViolation::GameNotActive)),
            GameStatus::Active => {}
        }

        let mark = self
            .players
            .iter()
            .find(|p| p.is_active && p.id == player_id)
            .and_then(|p| p.mark)
            .ok_or_else(|| DomainError::rule(RuleViolation::NotPlayerTurn))?;

        self.board.apply_mark(coord, mark)?;
        self.updated_at = now;

        // A single move can only complete one player's line, but make no
        // assumption about whose: evaluate both marks.
        let won = self
            .players
            .iter()
            .filter_map(|p| p.mark)
            .any(|m| self.board.is_winner(m));

        if won || self.board.is_full() {
            self.status = GameStatus::Finished;
            for player in &mut self.players {
                player.is_active = false;
            }
        } else {
            for player in &mut self.players {
                player.is_active = !player.is_active;
            }
        }
        Ok(())
    }

    /// The slot holding `user_id`, if any.
    pub fn player(&self, user_id: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.is_occupied() && p.id == user_id)
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_active)
    }

    /// Winning mark, if a line is complete.
    pub fn winner(&self) -> Option<Mark> {
        self.players
            .iter()
            .filter_map(|p| p.mark)
            .find(|&m| self.board.is_winner(m))
    }
}
