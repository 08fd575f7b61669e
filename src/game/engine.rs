//! Single-game state machine.
//!
//! Players act round-robin. On each turn the acting player either burns a
//! pending skip or rolls, moves, follows at most one offset, captures
//! opponents, and applies the skip directive of the square they end on.
//!
//! ## Rule details kept exactly
//!
//! - `pending_skips` is one signed counter. Skips are consumed only while it
//!   is positive, but "everyone else loses a turn" squares push it below
//!   zero, and later penalties must climb back above zero before any turn
//!   is skipped again.
//! - Both capture checks (before and after the offset) capture opponents on
//!   the *pre-offset* landing square.
//! - A roll that would carry a player past the finish wastes the turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::error::{Result, SimError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::RollSource;

/// Per-trial state of one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Turns this player has had, including skipped and wasted ones.
    pub turns_taken: u32,
    /// Board index.
    pub position: usize,
    /// Signed skip accumulator. Only positive values skip turns.
    pub pending_skips: i32,
    /// Times this player has been sent back to the start.
    pub captured: u32,
}

impl PlayerState {
    /// Burn one pending skip if any are owed. Returns true if the turn is lost.
    pub fn consume_skip(&mut self) -> bool {
        if self.pending_skips > 0 {
            self.pending_skips -= 1;
            true
        } else {
            false
        }
    }
}

/// Outcome of one completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The player who reached the finish.
    pub winner: PlayerId,
    /// Turns the winner took.
    pub winner_turns: u32,
    /// Final capture count of each player, in seat order.
    pub captures: Vec<u32>,
    /// Every square landed on, in order, including offset re-landings.
    pub visits: Vec<usize>,
}

/// Plays games on a borrowed board.
#[derive(Clone, Copy, Debug)]
pub struct GameEngine<'a> {
    board: &'a Board,
}

impl<'a> GameEngine<'a> {
    /// Create an engine for the given board.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// The board games are played on.
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Play one game to completion and collect the full result.
    pub fn play_game<R>(&self, player_count: usize, rolls: &mut R) -> Result<GameResult>
    where
        R: RollSource + ?Sized,
    {
        if player_count == 0 {
            return Err(SimError::InvalidPlayerCount(player_count));
        }

        let mut players = PlayerMap::with_default(player_count);
        let mut visits = Vec::new();
        let winner = self.play_into(&mut players, rolls, |ix| visits.push(ix));

        Ok(GameResult {
            winner,
            winner_turns: players[winner].turns_taken,
            captures: players.values().map(|p| p.captured).collect(),
            visits,
        })
    }

    /// Play one game using caller-owned player storage.
    ///
    /// `players` is reset first, so workers can reuse one map for every
    /// trial. `on_visit` is called with each square landed on.
    pub fn play_into<R, F>(&self, players: &mut PlayerMap<PlayerState>, rolls: &mut R, mut on_visit: F) -> PlayerId
    where
        R: RollSource + ?Sized,
        F: FnMut(usize),
    {
        players.reset();
        let player_count = players.player_count();

        let mut turn: u64 = 0;
        loop {
            let actor = PlayerId::for_turn(turn, player_count);
            if self.take_turn(players, actor, rolls, &mut on_visit) {
                return actor;
            }
            turn += 1;
        }
    }

    /// Play a single turn for `actor`. Returns true if `actor` reached the finish.
    pub fn take_turn<R, F>(
        &self,
        players: &mut PlayerMap<PlayerState>,
        actor: PlayerId,
        rolls: &mut R,
        on_visit: &mut F,
    ) -> bool
    where
        R: RollSource + ?Sized,
        F: FnMut(usize),
    {
        let board = self.board;
        let player = &mut players[actor];

        player.turns_taken += 1;
        if player.consume_skip() {
            return false;
        }

        let landing = player.position + rolls.roll() as usize;
        if landing >= board.len() {
            return false;
        }

        let mut checks: SmallVec<[usize; 2]> = SmallVec::new();
        player.position = landing;
        on_visit(landing);
        if !board[landing].is_safe() {
            checks.push(landing);
        }

        // Offsets are followed once, even onto another offset square.
        let offset = board[landing].offset;
        if offset != 0 {
            // Board::new guarantees every offset stays on the board.
            let shifted = (landing as i64 + i64::from(offset)) as usize;
            player.position = shifted;
            on_visit(shifted);
            if !board[shifted].is_safe() {
                checks.push(shifted);
            }
        }
        let resting = player.position;

        for &checked in &checks {
            if board[checked].is_safe() {
                continue;
            }
            // Captures always look at the pre-offset landing square.
            for (id, other) in players.iter_mut() {
                if id != actor && other.position == landing {
                    other.captured += 1;
                    other.position = 0;
                }
            }
        }

        let turns = board[resting].turns;
        if turns > 0 {
            players[actor].pending_skips += turns;
        } else if turns < 0 {
            for other in players.others_mut(actor) {
                other.pending_skips += turns;
            }
        }

        resting == board.finish()
    }
}
