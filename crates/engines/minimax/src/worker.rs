//! Runs a move selection off the caller's thread.
//!
//! A frame loop hands over a copy of the game, keeps polling the ticket,
//! and plays the move once it arrives. There is no cancellation: a search
//! nobody waits for runs to completion and its result is dropped.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use chess_core::{Engine, Game, SearchResult};
use tracing::warn;

use crate::error::WorkerLost;
use crate::policy::Difficulty;
use crate::MinimaxEngine;

/// Handle to a selection running on the rayon pool.
#[derive(Debug)]
pub struct MoveTicket {
    rx: Receiver<SearchResult>,
}

impl MoveTicket {
    /// Returns the result if it is ready, without blocking. A ticket yields
    /// its result once; polling again afterwards reports `WorkerLost`.
    pub fn try_take(&mut self) -> Result<Option<SearchResult>, WorkerLost> {
        match self.rx.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerLost),
        }
    }

    /// Blocks until the result arrives.
    pub fn wait(self) -> Result<SearchResult, WorkerLost> {
        self.rx.recv().map_err(|_| WorkerLost)
    }
}

/// Moves `game` onto the rayon pool and selects a move for it there.
pub fn spawn_best_move(mut game: Game, difficulty: Difficulty, seed: Option<u64>) -> MoveTicket {
    let (tx, rx) = mpsc::channel();
    rayon::spawn(move || {
        let mut engine = MinimaxEngine::with_seed(difficulty, seed);
        let result = engine.choose_move(&mut game);
        if tx.send(result).is_err() {
            warn!("move ticket dropped before the search finished");
        }
    });
    MoveTicket { rx }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
