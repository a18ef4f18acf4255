//! This module contains the Sudoku front end of the exact cover engine.
//!
//! A classic Sudoku of side length `n = w²` is translated into an exact
//! cover matrix with four constraint families of `n²` columns each: every
//! cell is filled, every row contains every digit, every column contains
//! every digit, and every `w×w` block contains every digit. Each candidate
//! entry `(row, column, digit)` becomes one matrix row touching exactly
//! one column of each family.

use crate::{index, Board};
use crate::error::{DlxError, DlxResult};
use crate::matrix::DlxMatrix;
use crate::solver::{Choice, SaveMode, Search};

use log::warn;

/// A solver for classic Sudoku puzzles of a fixed size. The exact cover
/// matrix is built once, at construction time; afterwards any number of
/// puzzles of that size can be solved with the same instance, as every
/// search restores the matrix before returning.
pub struct SudokuSolver {
    size: usize,
    block: usize,
    matrix: DlxMatrix
}

impl SudokuSolver {

    /// Creates a new solver for Sudoku with the given side length, which
    /// must be a perfect square. The blocks of the grid are squares with
    /// the side length `√size`.
    ///
    /// # Errors
    ///
    /// If `size` is zero or not a perfect square. In that case,
    /// `DlxError::InvalidDimensions` is returned.
    pub fn new(size: usize) -> DlxResult<SudokuSolver> {
        if size == 0 {
            return Err(DlxError::InvalidDimensions);
        }

        let block = (size as f64).sqrt() as usize;
        let block = [block.saturating_sub(1), block, block + 1].into_iter()
            .find(|b| b * b == size)
            .ok_or(DlxError::InvalidDimensions)?;
        let width = 4 * size * size;
        let matrix = DlxMatrix::generate(size * size * size, width, 4,
            width, |_| size,
            |row, constraint| Self::column_for(size, block, row, constraint));

        Ok(SudokuSolver {
            size,
            block,
            matrix
        })
    }

    /// The index of the candidate matrix row placing `digit` at the given
    /// cell.
    fn candidate(size: usize, column: usize, row: usize, digit: usize)
            -> usize {
        (row * size + column) * size + digit - 1
    }

    /// The matrix column of the `constraint`-th one of the given candidate
    /// row: cell, row-digit, column-digit and block-digit, in that order.
    fn column_for(size: usize, block: usize, candidate: usize,
            constraint: usize) -> usize {
        let row = candidate / size / size;
        let column = candidate / size % size;
        let digit = candidate % size;

        match constraint {
            0 => index(column, row, size),
            1 => size * size + row * size + digit,
            2 => 2 * size * size + column * size + digit,
            3 => 3 * size * size
                + (row / block * block + column / block) * size + digit,
            _ => unreachable!()
        }
    }

    fn check_input(&self, puzzle: &Board) -> DlxResult<()> {
        if puzzle.size() != self.size {
            return Err(DlxError::InvalidDimensions);
        }

        if puzzle.cells().iter().flatten().any(|&digit| digit > self.size) {
            return Err(DlxError::InvalidNumber);
        }

        Ok(())
    }

    fn interpret(puzzle: &Board, size: usize, choices: &[Choice]) -> Board {
        let mut solution = puzzle.clone();

        for choice in choices {
            let row = choice.row / size / size;
            let column = choice.row / size % size;
            let digit = choice.row % size + 1;
            solution.set_cell(column, row, digit).unwrap();
        }

        solution
    }

    fn run(&mut self, puzzle: &Board, limit: Option<usize>, mode: SaveMode)
            -> (Vec<Board>, usize) {
        let size = self.size;
        let mut search = Search::new(&mut self.matrix);

        for row in 0..size {
            for column in 0..size {
                let digit = match puzzle.get_cell(column, row).unwrap() {
                    Some(digit) => digit,
                    None => continue
                };
                let candidate = Self::candidate(size, column, row, digit);

                if !search.cover_given_row(candidate) {
                    warn!("over-constrained input: clue {} in column {}, \
                        row {} conflicts with the other clues", digit,
                        column, row);
                    search.abort();
                    return (Vec::new(), 0);
                }
            }
        }

        search.run(limit, mode,
            |choices| Self::interpret(puzzle, size, choices))
    }

    /// Gets the side length of the puzzles this solver accepts.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the block side length of the puzzles this solver accepts.
    pub fn block(&self) -> usize {
        self.block
    }

    /// Solves the given puzzle, returning the first solution found, or
    /// `None` if the puzzle is unsolvable. Filled cells are taken as
    /// clues which every solution must contain.
    ///
    /// # Errors
    ///
    /// * `DlxError::InvalidDimensions` If the puzzle's size differs from
    /// this solver's size.
    /// * `DlxError::InvalidNumber` If some cell contains a digit greater
    /// than the size.
    pub fn solve_first(&mut self, puzzle: &Board)
            -> DlxResult<Option<Board>> {
        Ok(self.solve(puzzle, Some(1))?.into_iter().next())
    }

    /// Solves the given puzzle, returning all solutions up to `limit`
    /// (`None` meaning all of them) in deterministic order. An unsolvable
    /// or over-constrained puzzle yields an empty vector, which is not an
    /// error.
    ///
    /// # Errors
    ///
    /// * `DlxError::InvalidDimensions` If the puzzle's size differs from
    /// this solver's size.
    /// * `DlxError::InvalidNumber` If some cell contains a digit greater
    /// than the size.
    pub fn solve(&mut self, puzzle: &Board, limit: Option<usize>)
            -> DlxResult<Vec<Board>> {
        self.solve_with(puzzle, limit, SaveMode::Solutions)
    }

    /// Solves the given puzzle like [SudokuSolver::solve], recording
    /// states according to the given [SaveMode].
    ///
    /// # Errors
    ///
    /// * `DlxError::InvalidDimensions` If the puzzle's size differs from
    /// this solver's size.
    /// * `DlxError::InvalidNumber` If some cell contains a digit greater
    /// than the size.
    pub fn solve_with(&mut self, puzzle: &Board, limit: Option<usize>,
            mode: SaveMode) -> DlxResult<Vec<Board>> {
        self.check_input(puzzle)?;
        Ok(self.run(puzzle, limit, mode).0)
    }

    /// Counts the solutions of the given puzzle up to `limit` (`None`
    /// meaning all of them) without materializing any boards.
    ///
    /// # Errors
    ///
    /// * `DlxError::InvalidDimensions` If the puzzle's size differs from
    /// this solver's size.
    /// * `DlxError::InvalidNumber` If some cell contains a digit greater
    /// than the size.
    pub fn count_solutions(&mut self, puzzle: &Board, limit: Option<usize>)
            -> DlxResult<usize> {
        self.check_input(puzzle)?;
        Ok(self.run(puzzle, limit, SaveMode::None).1)
    }
}
