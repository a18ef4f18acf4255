// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an exact cover engine based on Knuth's Algorithm X
//! with dancing links, together with front ends that phrase three classic
//! puzzles as exact cover problems. It supports the following key features:
//!
//! * Parsing and printing square puzzle boards
//! * Solving classic Sudoku of any perfect-square size
//! * Solving the N-Queens problem, with support for pre-placed queens
//! * Tiling square boards with polyominoes in all rotations and
//! reflections, with support for pre-occupied cells
//! * Enumerating all solutions, a bounded number of them, or only their
//! count, and recording search traces for diagnostics
//!
//! All front ends exchange puzzle states through the shared [Board] type, a
//! square grid of optionally filled cells.
//!
//! # Parsing and printing boards
//!
//! See [Board::parse] for the exact format of a board code.
//!
//! Codes can be used to exchange boards, while pretty prints can be used to
//! display a board in a clearer manner. An example of how to parse and
//! display a board is provided below.
//!
//! ```
//! use dlx_puzzles::Board;
//!
//! let board = Board::parse("4;1, , ,4, , , , , , , , ,4, , ,1").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Solving Sudoku
//!
//! A [SudokuSolver](sudoku::SudokuSolver) translates a Sudoku board into an
//! exact cover matrix once, at construction time, and can then solve any
//! number of puzzles of its size. The solver finds every board that is
//! consistent with the given clues, up to a configurable limit.
//!
//! ```
//! use dlx_puzzles::Board;
//! use dlx_puzzles::sudoku::SudokuSolver;
//!
//! let mut solver = SudokuSolver::new(4).unwrap();
//! let puzzle = Board::parse("4; ,2,3,4,3,4,1,2,2,1,4,3,4,3,2,1").unwrap();
//! let solution = solver.solve_first(&puzzle).unwrap().unwrap();
//!
//! assert_eq!(Some(1), solution.get_cell(0, 0).unwrap());
//! ```
//!
//! # Solving N-Queens
//!
//! A [QueensSolver](queens::QueensSolver) places one queen into every row
//! and column of the board such that no two queens share a diagonal. Cells
//! filled with a 1 in the input are treated as pre-placed queens.
//!
//! ```
//! use dlx_puzzles::Board;
//! use dlx_puzzles::queens::QueensSolver;
//!
//! let mut solver = QueensSolver::new(4).unwrap();
//! let empty = Board::new(4).unwrap();
//!
//! assert_eq!(2, solver.count_solutions(&empty, None).unwrap());
//! ```
//!
//! # Tiling with polyominoes
//!
//! A [Polyomino](polyomino::Polyomino) is described by the cell offsets of
//! its shape; its rotations and reflections are derived automatically. A
//! [PolyominoSolver](polyomino::PolyominoSolver) places every piece of its
//! set exactly once such that together they cover all free cells of the
//! board. Solved boards carry `piece_index + 1` in each covered cell.
//!
//! ```
//! use dlx_puzzles::Board;
//! use dlx_puzzles::polyomino::{Polyomino, PolyominoSolver};
//!
//! let square = Polyomino::new(&[(0, 0), (1, 0), (0, 1), (1, 1)]).unwrap();
//! let mut solver = PolyominoSolver::new(vec![square], 2).unwrap();
//! let solutions = solver.solve(&Board::new(2).unwrap(), None).unwrap();
//!
//! assert_eq!(1, solutions.len());
//! assert!(solutions[0].cells().iter().all(|&cell| cell == Some(1)));
//! ```
//!
//! # Note regarding performance
//!
//! Solving a single Sudoku or queens puzzle is fast even in debug builds,
//! but exhaustive enumerations (all solutions of a large tiling problem)
//! profit greatly from optimization. It is strongly recommended to use at
//! least `opt-level = 2`, even in tests that enumerate solutions. The
//! [CorrectMoves](solver::SaveMode::CorrectMoves) and
//! [AllMoves](solver::SaveMode::AllMoves) modes can enlarge the output
//! list quadratically or worse and are intended for diagnostics only.

pub mod error;
pub mod polyomino;
pub mod queens;
pub mod solver;
pub mod sudoku;

mod headers;
mod matrix;

#[cfg(test)]
mod random_tests;

use error::{BoardParseError, BoardParseResult, DlxError, DlxResult};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt::{self, Display, Error, Formatter};

/// A square grid of cells, each of which may or may not be filled with a
/// number. This is the common input and output format of all puzzle
/// solvers in this crate: for Sudoku a filled cell holds a digit, for
/// N-Queens a 1 marking a queen, and for polyomino tiling a piece marker.
///
/// `Board` implements `Display`, but only boards with a size of less than
/// or equal to 9, whose cells all hold numbers no greater than 9, can be
/// displayed with the digits 1 to 9. All other boards will raise an
/// error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(board: &Board, start: char, sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char,
        newline: bool) -> String {
    let size = board.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else {
            result.push(sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(board: &Board) -> String {
    line(board, '╔', '╤', |_| '═', '═', '╗', true)
}

fn separator_line(board: &Board) -> String {
    line(board, '╟', '┼', |_| '─', '─', '╢', true)
}

fn bottom_row(board: &Board) -> String {
    line(board, '╚', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &Board, y: usize) -> String {
    line(board, '║', '│', |x| to_char(board.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let displayable = self.cells.iter().flatten().all(|&n| n <= 9);

        if size > 9 || !displayable {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let separator_line = separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else {
                f.write_str(separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

impl Board {

    /// Creates a new, empty board with the given side length.
    ///
    /// # Errors
    ///
    /// If `size` is invalid (zero). In that case,
    /// `DlxError::InvalidDimensions` is returned.
    pub fn new(size: usize) -> DlxResult<Board> {
        if size == 0 {
            return Err(DlxError::InvalidDimensions);
        }

        Ok(Board {
            size,
            cells: vec![None; size * size]
        })
    }

    /// Parses a code encoding a board. The code has to be of the format
    /// `<size>;<cells>` where `<cells>` is a comma-separated list of
    /// entries, which are either empty or a number. The entries are
    /// assigned left-to-right, top-to-bottom, where each row is completed
    /// before the next one is started. Whitespace in the entries is
    /// ignored to allow for more intuitive formatting. The number of
    /// entries must be `size²`.
    ///
    /// As an example, the code `4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` parses
    /// to the following board:
    ///
    /// ```text
    /// ╔═══╤═══╤═══╤═══╗
    /// ║ 1 │   │ 2 │   ║
    /// ╟───┼───┼───┼───╢
    /// ║   │ 3 │   │ 4 ║
    /// ╟───┼───┼───┼───╢
    /// ║   │   │   │ 3 ║
    /// ╟───┼───┼───┼───╢
    /// ║   │ 1 │   │ 2 ║
    /// ╚═══╧═══╧═══╧═══╝
    /// ```
    ///
    /// Cell contents are only checked to be positive; whether they are
    /// meaningful is decided by the solver the board is handed to.
    ///
    /// # Errors
    ///
    /// Any specialization of `BoardParseError` (see that documentation).
    pub fn parse(code: &str) -> BoardParseResult<Board> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(BoardParseError::WrongNumberOfParts);
        }

        let size = parts[0].trim().parse::<usize>()?;

        if size == 0 {
            return Err(BoardParseError::InvalidDimensions);
        }

        let mut board = Board {
            size,
            cells: vec![None; size * size]
        };
        let numbers: Vec<&str> = parts[1].split(',').collect();

        if numbers.len() != size * size {
            return Err(BoardParseError::WrongNumberOfCells);
        }

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 {
                return Err(BoardParseError::InvalidNumber);
            }

            board.cells[i] = Some(number);
        }

        Ok(board)
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [Board::parse]. That is, a board that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use dlx_puzzles::Board;
    ///
    /// let mut board = Board::new(4).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// board.set_cell(1, 1, 4).unwrap();
    /// board.set_cell(1, 2, 5).unwrap();
    ///
    /// let board_str = board.to_parseable_string();
    /// let board_parsed = Board::parse(board_str.as_str()).unwrap();
    /// assert_eq!(board, board_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.size);
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the side length of the board, that is, the number of cells in
    /// each row and each column.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `DlxError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> DlxResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(DlxError::OutOfBounds)
        }
        else {
            let index = index(column, row, size);
            Ok(self.cells[index])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is in the specified
    /// cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `DlxError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> DlxResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be
    /// greater than 0. Upper bounds depend on the puzzle the board is used
    /// for and are checked by the solver.
    ///
    /// # Errors
    ///
    /// * `DlxError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `DlxError::InvalidNumber` If `number` is 0.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> DlxResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(DlxError::OutOfBounds);
        }

        if number == 0 {
            return Err(DlxError::InvalidNumber);
        }

        let index = index(column, row, size);
        self.cells[index] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is,
    /// if it contains a number, that number is removed. If the cell is
    /// already empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `DlxError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> DlxResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(DlxError::OutOfBounds);
        }

        let index = index(column, row, size);
        self.cells[index] = None;
        Ok(())
    }

    fn verify_dimensions(&self, other: &Board) -> DlxResult<()> {
        if self.size != other.size {
            Err(DlxError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Assigns the content of another board to this one, i.e., changes the
    /// cells in this board to the state in `other`. The other board must
    /// have the same size as this one.
    ///
    /// # Errors
    ///
    /// If the sizes are not the same. In that case,
    /// `DlxError::InvalidDimensions` is returned.
    pub fn assign(&mut self, other: &Board) -> DlxResult<()> {
        self.verify_dimensions(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Counts the number of filled cells on this board.
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this board is full, i.e. every cell is filled
    /// with a number. In this case, [Board::count_filled] returns the
    /// square of [Board::size].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this board is empty, i.e. no cell is filled with
    /// a number. In this case, [Board::count_filled] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this board configuration is a subset of another
    /// one. That is, all cells filled in this board with some number must
    /// be filled in `other` with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` board are not the same. In
    /// that case, `DlxError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &Board) -> DlxResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            }))
    }

    /// Indicates whether this board configuration is a superset of another
    /// one. That is, all cells filled in the `other` board with some
    /// number must be filled in this one with the same number. If this
    /// condition is met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` board are not the same. In
    /// that case, `DlxError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &Board) -> DlxResult<bool> {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }

    /// Gets a mutable reference to the vector which holds the cells. They
    /// are in left-to-right, top-to-bottom order, where rows are together.
    pub fn cells_mut(&mut self) -> &mut Vec<Option<usize>> {
        &mut self.cells
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S)
            -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_parseable_string().as_str())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D)
            -> Result<Board, D::Error> {
        let code = String::deserialize(deserializer)?;
        Board::parse(code.as_str())
            .map_err(|e| serde::de::Error::custom(
                format!("invalid board code: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let board_res = Board::parse("4; 1,,,2, ,3,,4, ,2,,, 3,,,");

        if let Ok(board) = board_res {
            assert_eq!(4, board.size());
            assert_eq!(Some(1), board.get_cell(0, 0).unwrap());
            assert_eq!(None, board.get_cell(1, 0).unwrap());
            assert_eq!(None, board.get_cell(2, 0).unwrap());
            assert_eq!(Some(2), board.get_cell(3, 0).unwrap());
            assert_eq!(None, board.get_cell(0, 1).unwrap());
            assert_eq!(Some(3), board.get_cell(1, 1).unwrap());
            assert_eq!(None, board.get_cell(2, 1).unwrap());
            assert_eq!(Some(4), board.get_cell(3, 1).unwrap());
            assert_eq!(None, board.get_cell(0, 2).unwrap());
            assert_eq!(Some(2), board.get_cell(1, 2).unwrap());
            assert_eq!(None, board.get_cell(2, 2).unwrap());
            assert_eq!(None, board.get_cell(3, 2).unwrap());
            assert_eq!(Some(3), board.get_cell(0, 3).unwrap());
            assert_eq!(None, board.get_cell(1, 3).unwrap());
            assert_eq!(None, board.get_cell(2, 3).unwrap());
            assert_eq!(None, board.get_cell(3, 3).unwrap());
        }
        else {
            panic!("Parsing valid board failed.");
        }
    }

    #[test]
    fn parse_invalid_dimensions() {
        assert_eq!(Err(BoardParseError::InvalidDimensions),
            Board::parse("0;"));
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(BoardParseError::WrongNumberOfParts),
            Board::parse("4;,,,,,,,,,,,,,,,;whatever"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(BoardParseError::NumberFormatError),
            Board::parse("#;,"));
        assert_eq!(Err(BoardParseError::NumberFormatError),
            Board::parse("2;1,x,,"));
    }

    #[test]
    fn parse_invalid_number() {
        assert_eq!(Err(BoardParseError::InvalidNumber),
            Board::parse("2;,,0,"));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(BoardParseError::WrongNumberOfCells),
            Board::parse("2;1,2,3"));
        assert_eq!(Err(BoardParseError::WrongNumberOfCells),
            Board::parse("2;1,2,3,4,1"));
    }

    #[test]
    fn large_cell_contents_are_permitted() {
        let board = Board::parse("2;12,,,").unwrap();
        assert_eq!(Some(12), board.get_cell(0, 0).unwrap());
    }

    #[test]
    fn to_parseable_string() {
        let mut board = Board::new(4).unwrap();

        assert_eq!("4;,,,,,,,,,,,,,,,", board.to_parseable_string().as_str());

        board.set_cell(0, 0, 1).unwrap();
        board.set_cell(1, 1, 2).unwrap();
        board.set_cell(2, 2, 3).unwrap();
        board.set_cell(3, 3, 4).unwrap();

        assert_eq!("4;1,,,,,2,,,,,3,,,,,4",
            board.to_parseable_string().as_str());
    }

    #[test]
    fn invalid_creation_size() {
        assert_eq!(Err(DlxError::InvalidDimensions), Board::new(0));
    }

    #[test]
    fn cell_bounds_are_checked() {
        let mut board = Board::new(3).unwrap();

        assert_eq!(Err(DlxError::OutOfBounds), board.get_cell(3, 0));
        assert_eq!(Err(DlxError::OutOfBounds), board.set_cell(0, 3, 1));
        assert_eq!(Err(DlxError::OutOfBounds), board.clear_cell(1, 4));
        assert_eq!(Err(DlxError::InvalidNumber), board.set_cell(0, 0, 0));
    }

    #[test]
    fn count_filled_and_empty_and_full() {
        let empty = Board::parse("4;,,,,,,,,,,,,,,,").unwrap();
        let partial = Board::parse("4;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let full = Board::parse("4;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();

        assert_eq!(0, empty.count_filled());
        assert_eq!(5, partial.count_filled());
        assert_eq!(16, full.count_filled());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    fn assert_subset_relation(a: &Board, b: &Board, a_subset_b: bool,
            b_subset_a: bool) {
        assert!(a.is_subset(b).unwrap() == a_subset_b);
        assert!(a.is_superset(b).unwrap() == b_subset_a);
        assert!(b.is_subset(a).unwrap() == b_subset_a);
        assert!(b.is_superset(a).unwrap() == a_subset_b);
    }

    fn assert_true_subset(a: &Board, b: &Board) {
        assert_subset_relation(a, b, true, false)
    }

    fn assert_equal_set(a: &Board, b: &Board) {
        assert_subset_relation(a, b, true, true)
    }

    fn assert_unrelated_set(a: &Board, b: &Board) {
        assert_subset_relation(a, b, false, false)
    }

    #[test]
    fn empty_is_subset() {
        let empty = Board::new(4).unwrap();
        let non_empty = Board::parse("4;1,,,,,,,,,,,,,,,").unwrap();
        let full = Board::parse("4;1,2,3,4,3,4,1,2,2,3,1,4,4,1,3,2")
            .unwrap();

        assert_equal_set(&empty, &empty);
        assert_true_subset(&empty, &non_empty);
        assert_true_subset(&empty, &full);
    }

    #[test]
    fn true_subset() {
        let b1 = Board::parse("4;1,,3,,2,,,,4,,4,3,,,,2").unwrap();
        let b2 = Board::parse("4;1,2,3,,2,,3,,4,,4,3,,,1,2").unwrap();
        assert_true_subset(&b1, &b2);
    }

    #[test]
    fn unrelated_boards_not_subsets() {
        // b1 and b2 differ in the third digit (3 in b1, 4 in b2)
        let b1 = Board::parse("4;1,,3,,2,,,,4,,4,3,,,,2").unwrap();
        let b2 = Board::parse("4;1,,4,,2,,,,4,,4,3,,,,2").unwrap();
        assert_unrelated_set(&b1, &b2);
    }

    #[test]
    fn assign_requires_equal_dimensions() {
        let mut b1 = Board::new(4).unwrap();
        let b2 = Board::parse("4;1,,,,,,,,,,,,,,,").unwrap();
        let b3 = Board::new(3).unwrap();

        assert_eq!(Err(DlxError::InvalidDimensions), b1.assign(&b3));

        b1.assign(&b2).unwrap();
        assert_eq!(b1, b2);
    }

    #[test]
    fn serde_round_trip() {
        let board = Board::parse("4;1,,3,,2,,,,4,,4,3,,,,2").unwrap();
        let json = serde_json::to_string(&board).unwrap();

        assert_eq!("\"4;1,,3,,2,,,,4,,4,3,,,,2\"", json);

        let parsed: Board = serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(board, parsed);
    }

    #[test]
    fn serde_rejects_invalid_codes() {
        assert!(serde_json::from_str::<Board>("\"2;1,2,3\"").is_err());
        assert!(serde_json::from_str::<Board>("\"0;\"").is_err());
    }
}
