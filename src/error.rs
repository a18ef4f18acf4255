//! This module contains some error and result definitions used in this crate.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html) and the solver front ends. This does not
/// include errors that occur when parsing board codes, see
/// [BoardParseError](enum.BoardParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum DlxError {

    /// Indicates that the dimensions specified for a created board or
    /// solver are invalid. This is the case if they are less than 1, or,
    /// for Sudoku, if the side length is not a perfect square.
    InvalidDimensions,

    /// Indicates that some cell content is invalid for the puzzle in
    /// question. This is the case if it is less than 1 or, where the
    /// puzzle bounds cell contents, greater than that bound.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie
    /// outside the board in question. This is the case if they are greater
    /// than or equal to the size.
    OutOfBounds,

    /// An error that is raised whenever it is attempted to create a
    /// polyomino from an empty list of cells.
    EmptyPiece
}

/// Syntactic sugar for `Result<V, DlxError>`.
pub type DlxResult<V> = Result<V, DlxError>;

/// An enumeration of the errors that may occur when parsing a
/// [Board](crate::Board).
#[derive(Debug, Eq, PartialEq)]
pub enum BoardParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: size and
    /// cells (separated by ';'), so if the code does not contain exactly
    /// one semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the square of the size.
    WrongNumberOfCells,

    /// Indicates that the provided size is invalid (i.e. zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (size or cell content) could not
    /// be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (zero).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, BoardParseError>`.
pub type BoardParseResult<V> = Result<V, BoardParseError>;

impl From<ParseIntError> for BoardParseError {
    fn from(_: ParseIntError) -> Self {
        BoardParseError::NumberFormatError
    }
}
