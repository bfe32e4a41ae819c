//! Game state module - the rules engine
//!
//! This module ties together the board, pieces, RNG, scoring and the high score
//! store. It owns the session lifecycle, gravity timing, piece movement and
//! rotation, locking and line clears.
//!
//! Every command goes through [`GameState::apply_action`], which checks the
//! action against the current [`Phase`] once and ignores it if it is not
//! allowed there.

use log::{debug, info, warn};

use crate::collision::collides;
use crate::persistence::{HighScoreStore, MemoryHighScores};
use crate::pieces::Piece;
use crate::scoring::{calculate_score, drop_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::{Board, SimpleRng};

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    /// Kind that spawns after the active piece; empty before the first spawn.
    next: Option<PieceKind>,
    rng: SimpleRng,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    high_score: u32,
    drop_interval_ms: u32,
    drop_counter_ms: u32,
    /// Last lock event (consumed by the host).
    last_event: Option<LockEvent>,
    high_scores: Box<dyn HighScoreStore>,
}

impl GameState {
    /// Create an idle game with the given RNG seed and high score store.
    ///
    /// The stored high score is read once here. If it cannot be read the game
    /// starts from 0.
    pub fn new(seed: u32, mut high_scores: Box<dyn HighScoreStore>) -> Self {
        let high_score = match high_scores.load() {
            Ok(value) => value,
            Err(err) => {
                warn!("high score unavailable, starting from 0: {err:#}");
                0
            }
        };

        Self {
            board: Board::new(),
            active: None,
            next: None,
            rng: SimpleRng::new(seed),
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            high_score,
            drop_interval_ms: BASE_DROP_MS,
            drop_counter_ms: 0,
            last_event: None,
            high_scores,
        }
    }

    /// Idle game backed by a throwaway in-memory store
    pub fn in_memory(seed: u32) -> Self {
        Self::new(seed, Box::new(MemoryHighScores::new()))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.high_score = self.high_score;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a game action.
    ///
    /// Returns `false` when the action is not allowed in the current phase or
    /// had no effect (blocked move, rejected rotation).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !action.is_allowed_in(self.phase) {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::MoveDown => {
                self.step_down();
                true
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::Start => {
                self.begin_session();
                true
            }
            GameAction::TogglePause => {
                self.phase = match self.phase {
                    Phase::Paused => Phase::Playing,
                    _ => Phase::Paused,
                };
                debug!("phase -> {}", self.phase.as_str());
                true
            }
        }
    }

    pub fn start(&mut self) -> bool {
        self.apply_action(GameAction::Start)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.apply_action(GameAction::TogglePause)
    }

    pub fn move_left(&mut self) -> bool {
        self.apply_action(GameAction::MoveLeft)
    }

    pub fn move_right(&mut self) -> bool {
        self.apply_action(GameAction::MoveRight)
    }

    pub fn move_down(&mut self) -> bool {
        self.apply_action(GameAction::MoveDown)
    }

    pub fn rotate(&mut self) -> bool {
        self.apply_action(GameAction::Rotate)
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Only runs while playing. When the accumulated time exceeds the drop
    /// interval the piece steps down once (possibly locking) and the
    /// accumulator restarts from 0. Returns whether a gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.step_down();
            self.drop_counter_ms = 0;
            return true;
        }
        false
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Reset counters and board, then spawn the first piece
    fn begin_session(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.phase = Phase::Playing;

        info!("session started (high score {})", self.high_score);
        self.spawn_piece();
    }

    /// Make the pending kind current and draw a new pending kind.
    ///
    /// With nothing pending (first spawn of a session) the current kind is
    /// drawn directly. If the new piece overlaps anything at its spawn position
    /// the game is over; the piece stays current so it can still be shown.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.rng.next_kind(),
        };
        self.next = Some(self.rng.next_kind());

        let piece = Piece::spawn(kind);
        debug!("spawned {} ({})", kind.as_str(), piece.color());
        let blocked = collides(&self.board, piece.x, piece.y, &piece.shape);
        self.active = Some(piece);

        if blocked {
            self.phase = Phase::GameOver;
            self.record_high_score();
            info!(
                "game over: score {} level {} lines {}",
                self.score, self.level, self.lines
            );
            return false;
        }
        true
    }

    /// Translate the active piece if the target is free
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let (x, y) = (active.x + dx, active.y + dy);
        if collides(&self.board, x, y, &active.shape) {
            return false;
        }

        self.active = Some(Piece { x, y, ..active });
        true
    }

    /// One row down, or lock in place when blocked
    fn step_down(&mut self) {
        if self.try_move(0, 1) {
            self.drop_counter_ms = 0;
        } else {
            self.lock_piece();
        }
    }

    /// Rotate clockwise, trying one column left then one column right when the
    /// rotated matrix does not fit in place.
    ///
    /// Kicks stay within `0..=BOARD_WIDTH - rotated_width`. If nothing fits the
    /// piece is left exactly as it was.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotate_cw();
        let max_x = BOARD_WIDTH as i8 - rotated.width() as i8;
        let fits = |x: i8| !collides(&self.board, x, active.y, &rotated);

        let x = if fits(active.x) {
            active.x
        } else if active.x > 0 && fits(active.x - 1) {
            active.x - 1
        } else if active.x < max_x && fits(active.x + 1) {
            active.x + 1
        } else {
            return false;
        };

        self.active = Some(Piece {
            shape: rotated,
            x,
            ..active
        });
        true
    }

    /// Merge the active piece into the board, clear lines, score them, and
    /// spawn the replacement
    pub(crate) fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock_piece(&active);
        let lines_cleared = self.board.clear_completed_lines();

        let result = calculate_score(lines_cleared, self.level, self.lines);
        self.score = self.score.saturating_add(result.points);
        self.lines = self.lines.saturating_add(lines_cleared as u32);
        if result.level_up {
            self.level = result.level;
            self.drop_interval_ms = drop_interval_ms(self.level);
            info!(
                "level {} reached, gravity {}ms",
                self.level, self.drop_interval_ms
            );
        }
        if lines_cleared > 0 {
            debug!(
                "{} line(s) cleared for {} points (score {})",
                lines_cleared, result.points, self.score
            );
        }
        self.record_high_score();

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared: lines_cleared as u32,
            points: result.points,
            level: self.level,
            level_up: result.level_up,
            topped_out: !spawned,
        });
    }

    /// Raise and persist the high score as soon as the score passes it
    fn record_high_score(&mut self) {
        if self.score <= self.high_score {
            return;
        }
        self.high_score = self.score;
        if let Err(err) = self.high_scores.save(self.high_score) {
            warn!("could not save high score {}: {err:#}", self.high_score);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::in_memory(1)
    }
}
