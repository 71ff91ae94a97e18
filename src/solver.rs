//! This module contains the logic for enumerating the solutions of a
//! [Board](../struct.Board.html) by backtracking search.
//!
//! The search leans entirely on the board's propagation: trying a candidate
//! with [Board::set](../struct.Board.html#method.set) either cascades into a
//! consistent, more determined board or fails immediately, so no separate
//! constraint-checking pass is needed to prune dead branches.

use crate::{Board, Cell};
use crate::util::ValueSet;

/// The state of one running search. Collecting into this struct rather than
/// threading a vector through the recursion keeps the early-exit check for
/// bounded searches in one place.
struct Search {
    solutions: Vec<Board>,
    max_solutions: Option<usize>,
    nodes: u64
}

impl Search {

    fn new(max_solutions: Option<usize>) -> Search {
        Search {
            solutions: Vec::new(),
            max_solutions,
            nodes: 0
        }
    }

    /// Indicates that enough solutions have been collected and the entire
    /// search must stop, not merely skip a branch.
    fn is_complete(&self) -> bool {
        match self.max_solutions {
            Some(max_solutions) => self.solutions.len() >= max_solutions,
            None => false
        }
    }

    /// Selects the unresolved cell with the fewest remaining candidates,
    /// ties broken by scan order (minimum-remaining-values heuristic). For a
    /// solved board, returns `None`.
    fn select_branch_cell(board: &Board) -> Option<(usize, usize, ValueSet)> {
        let size = board.size();
        let mut best: Option<(usize, usize, ValueSet)> = None;

        for row in 0..size {
            for column in 0..size {
                if let Cell::Candidates(candidates) = board.cell(column, row) {
                    let better = match &best {
                        Some((_, _, best_candidates)) =>
                            candidates.len() < best_candidates.len(),
                        None => true
                    };

                    if better {
                        best = Some((column, row, *candidates));
                    }
                }
            }
        }

        best
    }

    fn explore(&mut self, board: Board) {
        self.nodes += 1;

        let (column, row, candidates) =
            match Search::select_branch_cell(&board) {
                Some(branch) => branch,
                None => {
                    self.solutions.push(board);
                    return;
                }
            };

        for value in candidates.iter() {
            let mut attempt = board.clone();

            if attempt.set(column, row, value).is_ok() {
                self.explore(attempt);
            }

            if self.is_complete() {
                return;
            }
        }
    }
}

/// Enumerates complete solutions of the given board by backtracking search.
///
/// The board itself is not modified; every branch works on an independent
/// copy. Branches are tried in ascending candidate order on the unresolved
/// cell with the fewest candidates, which makes the result deterministic for
/// a fixed board.
///
/// # Arguments
///
/// * `board`: The partial board whose completions to enumerate.
/// * `max_solutions`: If present, the search stops as soon as this many
/// solutions have been found. A cap of 2 answers the uniqueness question at
/// a fraction of the cost of exhaustive enumeration.
///
/// # Returns
///
/// The found solutions, all with [Board::is_solved](../struct.Board.html#method.is_solved)
/// `true`. Length 0 means the board is unsatisfiable, length 1 that the
/// found solution is unique (if uncapped or capped above 1), and greater
/// lengths that the board is ambiguous. These are all normal outcomes, not
/// errors.
pub fn solve(board: &Board, max_solutions: Option<usize>) -> Vec<Board> {
    let mut search = Search::new(max_solutions);

    if !search.is_complete() {
        search.explore(board.clone());
    }

    search.solutions
}

#[cfg(test)]
mod tests {

    use super::*;

    // An empty 4x4 board has this many solutions.
    const SHIDOKU_SOLUTIONS: usize = 288;

    fn pattern_9x9() -> Board {
        Board::parse(9,
            "1 2 3 4 5 6 7 8 9 \
             4 5 6 7 8 9 1 2 3 \
             7 8 9 1 2 3 4 5 6 \
             2 3 4 5 6 7 8 9 1 \
             5 6 7 8 9 1 2 3 4 \
             8 9 1 2 3 4 5 6 7 \
             3 4 5 6 7 8 9 1 2 \
             6 7 8 9 1 2 3 4 5 \
             9 1 2 3 4 5 6 7 8").unwrap()
    }

    #[test]
    fn solved_board_is_its_own_unique_solution() {
        let board = pattern_9x9();
        let solutions = solve(&board, None);

        assert_eq!(vec![board], solutions);
    }

    #[test]
    fn blanked_block_has_unique_completion() {
        let board = Board::parse(9,
            "1 2 3 4 5 . . . . \
             4 5 6 7 8 . . . 3 \
             7 8 9 1 2 . . . . \
             2 3 4 5 6 7 . . . \
             5 6 7 8 9 1 2 3 4 \
             8 9 1 2 3 4 5 6 7 \
             3 4 5 6 7 8 9 1 2 \
             6 7 8 9 1 2 3 4 5 \
             9 1 2 3 4 5 6 7 8").unwrap();
        let solutions = solve(&board, None);

        assert_eq!(vec![pattern_9x9()], solutions);
    }

    #[test]
    fn empty_board_solution_count() {
        let board = Board::empty(4).unwrap();
        let solutions = solve(&board, None);

        assert_eq!(SHIDOKU_SOLUTIONS, solutions.len());

        for solution in &solutions {
            assert!(solution.is_solved());
        }
    }

    #[test]
    fn smallest_board_has_single_solution() {
        let board = Board::empty(1).unwrap();
        let solutions = solve(&board, None);

        assert_eq!(1, solutions.len());
        assert_eq!(vec![vec![1]], solutions[0].to_grid());
    }

    #[test]
    fn capped_search_returns_cap_many_solutions() {
        let board = Board::empty(4).unwrap();
        let solutions = solve(&board, Some(2));

        assert_eq!(2, solutions.len());
        assert_ne!(solutions[0], solutions[1]);

        for solution in &solutions {
            assert!(solution.is_solved());
        }
    }

    #[test]
    fn cap_of_zero_finds_nothing() {
        let board = Board::empty(4).unwrap();

        assert!(solve(&board, Some(0)).is_empty());
    }

    #[test]
    fn capped_search_stops_early() {
        let board = Board::empty(4).unwrap();

        let mut capped = Search::new(Some(2));
        capped.explore(board.clone());

        let mut unbounded = Search::new(None);
        unbounded.explore(board);

        assert_eq!(2, capped.solutions.len());
        assert_eq!(SHIDOKU_SOLUTIONS, unbounded.solutions.len());
        assert!(capped.nodes < unbounded.nodes,
            "capped search explored as many nodes as the unbounded one");
    }

    #[test]
    fn pigeonhole_contradiction_yields_no_solutions() {
        // Three cells of the top-left region are reduced to the candidates
        // {1, 2}, which no assignment can satisfy. Propagation alone does
        // not notice; every search branch must die.

        let mut board = Board::empty(4).unwrap();

        for &(column, row) in &[(0, 0), (1, 0), (0, 1)] {
            board.remove(column, row, 3).unwrap();
            board.remove(column, row, 4).unwrap();
        }

        assert!(solve(&board, None).is_empty());
    }
}
