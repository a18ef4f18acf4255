//! This module contains the N-Queens front end of the exact cover engine.
//!
//! On a `w×w` board, every row and every column must hold exactly one
//! queen, which gives `2w` mandatory matrix columns. The `2(2w−1)`
//! diagonals must hold *at most* one queen, so they become optional
//! matrix columns: they never drive the column selection and do not need
//! to be covered, but any row covering one excludes all others on the
//! same diagonal. Each square of the board is one candidate matrix row.

use crate::Board;
use crate::error::{DlxError, DlxResult};
use crate::matrix::DlxMatrix;
use crate::solver::{Choice, SaveMode, Search};

use log::warn;

/// A solver for the N-Queens problem on boards of a fixed size. Cells
/// filled with a 1 in the input are treated as pre-placed queens which
/// every solution must contain. The exact cover matrix is built once, at
/// construction time.
pub struct QueensSolver {
    width: usize,
    matrix: DlxMatrix
}

impl QueensSolver {

    /// Creates a new solver for boards with the given side length.
    ///
    /// # Errors
    ///
    /// If `width` is invalid (zero). In that case,
    /// `DlxError::InvalidDimensions` is returned.
    pub fn new(width: usize) -> DlxResult<QueensSolver> {
        if width == 0 {
            return Err(DlxError::InvalidDimensions);
        }

        let optional_start = 2 * width;
        let array_width = optional_start + 2 * (2 * width - 1);
        let matrix = DlxMatrix::generate(width * width, array_width, 4,
            optional_start, |column| Self::initial_count(width, column),
            |square, constraint| {
                Self::column_for(width, square, constraint)
            });

        Ok(QueensSolver {
            width,
            matrix
        })
    }

    /// The number of squares on each rank, file and diagonal: `width` for
    /// the mandatory families, triangular for the diagonals.
    fn initial_count(width: usize, column: usize) -> usize {
        if column < 2 * width {
            width
        }
        else if column < 4 * width - 1 {
            width - (column - 2 * width).abs_diff(width - 1)
        }
        else {
            width - (column - (4 * width - 1)).abs_diff(width - 1)
        }
    }

    /// The matrix column of the `constraint`-th one of the given square's
    /// candidate row: rank, file, "↙" diagonal (constant `row + column`)
    /// and "↘" diagonal (constant `column − row`), in that order.
    fn column_for(width: usize, square: usize, constraint: usize) -> usize {
        let row = square / width;
        let column = square % width;

        match constraint {
            0 => row,
            1 => width + column,
            2 => 2 * width + row + column,
            3 => 4 * width - 1 + (width - 1 - row) + column,
            _ => unreachable!()
        }
    }

    fn check_input(&self, board: &Board) -> DlxResult<()> {
        if board.size() != self.width {
            return Err(DlxError::InvalidDimensions);
        }

        if board.cells().iter().flatten().any(|&cell| cell != 1) {
            return Err(DlxError::InvalidNumber);
        }

        Ok(())
    }

    fn interpret(board: &Board, width: usize, choices: &[Choice]) -> Board {
        let mut result = board.clone();

        for choice in choices {
            result.set_cell(choice.row % width, choice.row / width, 1)
                .unwrap();
        }

        result
    }

    fn run(&mut self, board: &Board, limit: Option<usize>, mode: SaveMode)
            -> (Vec<Board>, usize) {
        let width = self.width;
        let mut search = Search::new(&mut self.matrix);

        for row in 0..width {
            for column in 0..width {
                if board.get_cell(column, row).unwrap().is_none() {
                    continue;
                }

                if !search.cover_given_row(row * width + column) {
                    warn!("over-constrained input: the queen in column {}, \
                        row {} attacks another given queen", column, row);
                    search.abort();
                    return (Vec::new(), 0);
                }
            }
        }

        search.run(limit, mode,
            |choices| Self::interpret(board, width, choices))
    }

    /// Gets the side length of the boards this solver accepts.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Solves the given board, returning the first solution found, or
    /// `None` if there is none. Solutions mark every queen's cell with a
    /// 1 and contain all pre-placed queens.
    ///
    /// # Errors
    ///
    /// * `DlxError::InvalidDimensions` If the board's size differs from
    /// this solver's width.
    /// * `DlxError::InvalidNumber` If some filled cell contains a number
    /// other than 1.
    pub fn solve_first(&mut self, board: &Board)
            -> DlxResult<Option<Board>> {
        Ok(self.solve(board, Some(1))?.into_iter().next())
    }

    /// Solves the given board, returning all solutions up to `limit`
    /// (`None` meaning all of them) in deterministic order. An unsolvable
    /// or over-constrained board yields an empty vector, which is not an
    /// error.
    ///
    /// # Errors
    ///
    /// * `DlxError::InvalidDimensions` If the board's size differs from
    /// this solver's width.
    /// * `DlxError::InvalidNumber` If some filled cell contains a number
    /// other than 1.
    pub fn solve(&mut self, board: &Board, limit: Option<usize>)
            -> DlxResult<Vec<Board>> {
        self.solve_with(board, limit, SaveMode::Solutions)
    }

    /// Solves the given board like [QueensSolver::solve], recording
    /// states according to the given [SaveMode].
    ///
    /// # Errors
    ///
    /// * `DlxError::InvalidDimensions` If the board's size differs from
    /// this solver's width.
    /// * `DlxError::InvalidNumber` If some filled cell contains a number
    /// other than 1.
    pub fn solve_with(&mut self, board: &Board, limit: Option<usize>,
            mode: SaveMode) -> DlxResult<Vec<Board>> {
        self.check_input(board)?;
        Ok(self.run(board, limit, mode).0)
    }

    /// Counts the solutions of the given board up to `limit` (`None`
    /// meaning all of them) without materializing any boards.
    ///
    /// # Errors
    ///
    /// * `DlxError::InvalidDimensions` If the board's size differs from
    /// this solver's width.
    /// * `DlxError::InvalidNumber` If some filled cell contains a number
    /// other than 1.
    pub fn count_solutions(&mut self, board: &Board, limit: Option<usize>)
            -> DlxResult<usize> {
        self.check_input(board)?;
        Ok(self.run(board, limit, SaveMode::None).1)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn queen_positions(board: &Board) -> Vec<(usize, usize)> {
        let width = board.size();
        (0..width * width)
            .filter(|&square| {
                board.cells()[square].is_some()
            })
            .map(|square| (square % width, square / width))
            .collect()
    }

    fn assert_valid_placement(board: &Board) {
        let queens = queen_positions(board);

        assert_eq!(board.size(), queens.len());

        for (i, &(c1, r1)) in queens.iter().enumerate() {
            for &(c2, r2) in queens.iter().skip(i + 1) {
                assert_ne!(c1, c2);
                assert_ne!(r1, r2);
                assert_ne!(c1 + r2, c2 + r1);
                assert_ne!(c1 + r1, c2 + r2);
            }
        }
    }

    #[test]
    fn rejects_zero_width() {
        assert!(QueensSolver::new(0).is_err());
    }

    #[test]
    fn rejects_mismatched_boards() {
        let mut solver = QueensSolver::new(4).unwrap();

        assert_eq!(Err(DlxError::InvalidDimensions),
            solver.solve(&Board::new(5).unwrap(), None));
    }

    #[test]
    fn rejects_markers_other_than_one() {
        let mut solver = QueensSolver::new(4).unwrap();
        let mut board = Board::new(4).unwrap();
        board.set_cell(1, 2, 3).unwrap();

        assert_eq!(Err(DlxError::InvalidNumber), solver.solve(&board, None));
    }

    #[test]
    fn single_cell_board_has_one_solution() {
        let mut solver = QueensSolver::new(1).unwrap();
        let solutions = solver.solve(&Board::new(1).unwrap(), None).unwrap();

        assert_eq!(1, solutions.len());
        assert_eq!(Some(1), solutions[0].get_cell(0, 0).unwrap());
    }

    #[test]
    fn small_boards_are_unsolvable() {
        let mut solver = QueensSolver::new(2).unwrap();
        assert!(solver.solve(&Board::new(2).unwrap(), None).unwrap()
            .is_empty());

        let mut solver = QueensSolver::new(3).unwrap();
        assert!(solver.solve(&Board::new(3).unwrap(), None).unwrap()
            .is_empty());
    }

    #[test]
    fn four_queens_has_two_solutions() {
        let mut solver = QueensSolver::new(4).unwrap();
        let solutions = solver.solve(&Board::new(4).unwrap(), None).unwrap();

        assert_eq!(2, solutions.len());

        for solution in &solutions {
            assert_valid_placement(solution);
        }

        // The two solutions are mirror images of each other.
        assert_ne!(solutions[0], solutions[1]);
    }

    #[test]
    fn eight_queens_has_ninety_two_solutions() {
        let mut solver = QueensSolver::new(8).unwrap();
        let empty = Board::new(8).unwrap();

        assert_eq!(92, solver.count_solutions(&empty, None).unwrap());

        let solutions = solver.solve(&empty, None).unwrap();
        assert_eq!(92, solutions.len());

        for solution in &solutions {
            assert_valid_placement(solution);
        }

        // All 92 placements are distinct.
        let mut codes: Vec<String> = solutions.iter()
            .map(Board::to_parseable_string)
            .collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(92, codes.len());
    }

    #[test]
    fn pre_placed_queens_restrict_the_solutions() {
        let mut solver = QueensSolver::new(4).unwrap();

        // Neither 4-queens solution has a queen in the corner.
        let mut corner = Board::new(4).unwrap();
        corner.set_cell(0, 0, 1).unwrap();
        assert!(solver.solve(&corner, None).unwrap().is_empty());

        // Exactly one has a queen in column 1 of the first row.
        let mut off_corner = Board::new(4).unwrap();
        off_corner.set_cell(1, 0, 1).unwrap();
        let solutions = solver.solve(&off_corner, None).unwrap();

        assert_eq!(1, solutions.len());
        assert!(solutions[0].has_number(1, 0, 1).unwrap());
        assert_valid_placement(&solutions[0]);
    }

    #[test]
    fn attacking_given_queens_are_over_constrained() {
        let mut solver = QueensSolver::new(4).unwrap();

        // Same row.
        let mut board = Board::new(4).unwrap();
        board.set_cell(0, 0, 1).unwrap();
        board.set_cell(3, 0, 1).unwrap();
        assert!(solver.solve(&board, None).unwrap().is_empty());

        // Same diagonal.
        let mut board = Board::new(4).unwrap();
        board.set_cell(0, 0, 1).unwrap();
        board.set_cell(2, 2, 1).unwrap();
        assert!(solver.solve(&board, None).unwrap().is_empty());
    }

    #[test]
    fn solver_state_is_restored_after_every_call() {
        let mut solver = QueensSolver::new(5).unwrap();
        let pristine = solver.matrix.clone();
        let empty = Board::new(5).unwrap();

        solver.solve(&empty, None).unwrap();
        assert_eq!(pristine, solver.matrix);

        solver.solve(&empty, Some(3)).unwrap();
        assert_eq!(pristine, solver.matrix);

        let mut attacking = Board::new(5).unwrap();
        attacking.set_cell(0, 0, 1).unwrap();
        attacking.set_cell(0, 4, 1).unwrap();
        solver.solve(&attacking, None).unwrap();
        assert_eq!(pristine, solver.matrix);

        assert_eq!(10, solver.count_solutions(&empty, None).unwrap());
    }

    #[test]
    fn solving_is_deterministic() {
        let mut solver = QueensSolver::new(6).unwrap();
        let empty = Board::new(6).unwrap();

        let first = solver.solve(&empty, None).unwrap();
        let second = solver.solve(&empty, None).unwrap();

        assert_eq!(4, first.len());
        assert_eq!(first, second);
    }
}
