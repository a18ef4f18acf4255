//! This module contains the polyomino tiling front end of the exact cover
//! engine.
//!
//! A [Polyomino] is described by the cell offsets of its shape; its up to
//! eight distinct orientations (four rotations, each optionally mirrored)
//! are derived at construction time. A [PolyominoSolver] places every
//! piece of its set exactly once on a square board such that together the
//! pieces cover all cells that are not occupied from the outset.
//!
//! The exact cover matrix has one mandatory column per board cell and one
//! mandatory usage column per piece; every legal (piece, orientation,
//! offset) placement becomes one matrix row touching its covered cells
//! and its piece's usage column.

use crate::{index, Board};
use crate::error::{DlxError, DlxResult};
use crate::matrix::DlxMatrix;
use crate::solver::{Choice, SaveMode, Search};

use itertools::Itertools;

use log::warn;

use std::collections::BTreeSet;

/// One of the distinct orientations of a [Polyomino]: its cells,
/// normalized to a tight bounding box anchored at the origin, and the
/// dimensions of that box.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Orientation {
    pub(crate) cells: Vec<(usize, usize)>,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) flipped: bool
}

/// Rotates a shape by a quarter turn, mapping `(x, y)` to
/// `(y, width − 1 − x)`. The result is normalized again because the input
/// extents are tight.
fn rotate(cells: &BTreeSet<(usize, usize)>, width: usize)
        -> BTreeSet<(usize, usize)> {
    cells.iter().map(|&(x, y)| (y, width - 1 - x)).collect()
}

/// Mirrors a shape, mapping `(x, y)` to `(x, height − 1 − y)`.
fn mirror(cells: &BTreeSet<(usize, usize)>, height: usize)
        -> BTreeSet<(usize, usize)> {
    cells.iter().map(|&(x, y)| (x, height - 1 - y)).collect()
}

/// A polyomino shape, given by a set of cell offsets. Its rotations and
/// reflections are computed at construction time and de-duplicated, so a
/// symmetric piece yields fewer than eight orientations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Polyomino {
    width: usize,
    height: usize,
    orientations: Vec<Orientation>
}

impl Polyomino {

    /// Creates a new polyomino from the offsets of its cells relative to
    /// any fixed point. The offsets are normalized, so
    /// `[(0, 0), (1, 0)]` and `[(4, 2), (5, 2)]` describe the same
    /// horizontal domino. Duplicate offsets are ignored.
    ///
    /// # Errors
    ///
    /// If `cells` is empty. In that case, `DlxError::EmptyPiece` is
    /// returned.
    pub fn new(cells: &[(usize, usize)]) -> DlxResult<Polyomino> {
        if cells.is_empty() {
            return Err(DlxError::EmptyPiece);
        }

        let min_x = cells.iter().map(|c| c.0).min().unwrap();
        let min_y = cells.iter().map(|c| c.1).min().unwrap();
        let cells: BTreeSet<(usize, usize)> = cells.iter()
            .map(|&(x, y)| (x - min_x, y - min_y))
            .collect();
        let width = cells.iter().map(|c| c.0).max().unwrap() + 1;
        let height = cells.iter().map(|c| c.1).max().unwrap() + 1;

        let mut candidates = Vec::with_capacity(8);
        let mut shape = (cells.clone(), width, height);

        for _ in 0..4 {
            let rotated = (rotate(&shape.0, shape.1), shape.2, shape.1);
            candidates.push(shape);
            shape = rotated;
        }

        let mut shape = (mirror(&cells, height), width, height);

        for _ in 0..4 {
            let rotated = (rotate(&shape.0, shape.1), shape.2, shape.1);
            candidates.push(shape);
            shape = rotated;
        }

        let orientations = candidates.into_iter()
            .unique_by(|(cells, _, _)| cells.clone())
            .map(|(cells, w, h)| Orientation {
                cells: cells.into_iter().collect(),
                width: w,
                height: h,
                flipped: w != width
            })
            .collect();

        Ok(Polyomino {
            width,
            height,
            orientations
        })
    }

    /// Gets the number of cells this polyomino consists of.
    pub fn size(&self) -> usize {
        self.orientations[0].cells.len()
    }

    /// Gets the width of this polyomino's bounding box in its canonical
    /// orientation.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets the height of this polyomino's bounding box in its canonical
    /// orientation.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the number of distinct orientations of this polyomino, at
    /// most eight.
    pub fn orientation_count(&self) -> usize {
        self.orientations.len()
    }

    /// Gets the width of this polyomino's bounding box in the given
    /// orientation.
    ///
    /// # Panics
    ///
    /// If `orientation` is not less than [Polyomino::orientation_count].
    pub fn orientation_width(&self, orientation: usize) -> usize {
        self.orientations[orientation].width
    }

    /// Gets the height of this polyomino's bounding box in the given
    /// orientation.
    ///
    /// # Panics
    ///
    /// If `orientation` is not less than [Polyomino::orientation_count].
    pub fn orientation_height(&self, orientation: usize) -> usize {
        self.orientations[orientation].height
    }

    /// Indicates whether the bounding box of the given orientation has
    /// swapped width and height compared to the canonical orientation.
    ///
    /// # Panics
    ///
    /// If `orientation` is not less than [Polyomino::orientation_count].
    pub fn is_flipped(&self, orientation: usize) -> bool {
        self.orientations[orientation].flipped
    }

    pub(crate) fn orientation(&self, orientation: usize) -> &Orientation {
        &self.orientations[orientation]
    }
}

/// One legal placement, that is, one matrix row: the index of the placed
/// piece and the board cells it covers.
struct Placement {
    piece: usize,
    cells: Vec<usize>
}

/// A solver that tiles a square board with a fixed set of polyominoes,
/// using every piece exactly once in any of its orientations. Cells that
/// are filled in the input board are treated as occupied: no piece may
/// cover them. In solutions, every cell covered by a piece holds
/// `piece_index + 1`, while occupied cells keep their input markers.
pub struct PolyominoSolver {
    board_width: usize,
    pieces: Vec<Polyomino>,
    placements: Vec<Placement>,
    matrix: DlxMatrix
}

impl PolyominoSolver {

    /// Creates a new solver that places the given pieces on boards with
    /// the given side length. All placements of all pieces are enumerated
    /// here, so construction cost grows with the board area, the piece
    /// count and their orientation counts.
    ///
    /// # Errors
    ///
    /// If `board_width` is invalid (zero). In that case,
    /// `DlxError::InvalidDimensions` is returned.
    pub fn new(pieces: Vec<Polyomino>, board_width: usize)
            -> DlxResult<PolyominoSolver> {
        if board_width == 0 {
            return Err(DlxError::InvalidDimensions);
        }

        let cell_columns = board_width * board_width;
        let width = cell_columns + pieces.len();
        let mut placements = Vec::new();
        let mut rows: Vec<Vec<usize>> = Vec::new();

        for row in 0..board_width {
            for column in 0..board_width {
                for (piece_index, piece) in pieces.iter().enumerate() {
                    for orientation in 0..piece.orientation_count() {
                        let orientation = piece.orientation(orientation);

                        if row + orientation.height > board_width
                                || column + orientation.width > board_width {
                            continue;
                        }

                        let cells: Vec<usize> = orientation.cells.iter()
                            .map(|&(x, y)| {
                                index(column + x, row + y, board_width)
                            })
                            .collect();
                        let mut columns = cells.clone();
                        columns.push(cell_columns + piece_index);
                        placements.push(Placement {
                            piece: piece_index,
                            cells
                        });
                        rows.push(columns);
                    }
                }
            }
        }

        let matrix = DlxMatrix::from_sparse_rows(width, width, &rows);

        Ok(PolyominoSolver {
            board_width,
            pieces,
            placements,
            matrix
        })
    }

    fn check_input(&self, board: &Board) -> DlxResult<()> {
        if board.size() != self.board_width {
            return Err(DlxError::InvalidDimensions);
        }

        Ok(())
    }

    fn interpret(board: &Board, placements: &[Placement],
            choices: &[Choice]) -> Board {
        let mut result = board.clone();

        for choice in choices {
            let placement = &placements[choice.row];

            for &cell in &placement.cells {
                result.cells_mut()[cell] = Some(placement.piece + 1);
            }
        }

        result
    }

    fn run(&mut self, board: &Board, limit: Option<usize>, mode: SaveMode)
            -> (Vec<Board>, usize) {
        let board_width = self.board_width;
        let placements = &self.placements;
        let mut search = Search::new(&mut self.matrix);

        for row in 0..board_width {
            for column in 0..board_width {
                if board.get_cell(column, row).unwrap().is_none() {
                    continue;
                }

                let cell = index(column, row, board_width);

                if !search.cover_occupied_column(cell) {
                    warn!("over-constrained input: the occupied cell in \
                        column {}, row {} leaves an uncoverable cell",
                        column, row);
                    search.abort();
                    return (Vec::new(), 0);
                }
            }
        }

        search.run(limit, mode,
            |choices| Self::interpret(board, placements, choices))
    }

    /// Gets the side length of the boards this solver accepts.
    pub fn board_width(&self) -> usize {
        self.board_width
    }

    /// Gets the pieces this solver places.
    pub fn pieces(&self) -> &[Polyomino] {
        &self.pieces
    }

    /// Solves the given board, returning the first tiling found, or
    /// `None` if there is none.
    ///
    /// # Errors
    ///
    /// If the board's size differs from this solver's board width. In
    /// that case, `DlxError::InvalidDimensions` is returned.
    pub fn solve_first(&mut self, board: &Board)
            -> DlxResult<Option<Board>> {
        Ok(self.solve(board, Some(1))?.into_iter().next())
    }

    /// Solves the given board, returning all tilings up to `limit`
    /// (`None` meaning all of them) in deterministic order. Two tilings
    /// that place different pieces on the same cells are distinct. An
    /// untileable board yields an empty vector, which is not an error.
    ///
    /// # Errors
    ///
    /// If the board's size differs from this solver's board width. In
    /// that case, `DlxError::InvalidDimensions` is returned.
    pub fn solve(&mut self, board: &Board, limit: Option<usize>)
            -> DlxResult<Vec<Board>> {
        self.solve_with(board, limit, SaveMode::Solutions)
    }

    /// Solves the given board like [PolyominoSolver::solve], recording
    /// states according to the given [SaveMode].
    ///
    /// # Errors
    ///
    /// If the board's size differs from this solver's board width. In
    /// that case, `DlxError::InvalidDimensions` is returned.
    pub fn solve_with(&mut self, board: &Board, limit: Option<usize>,
            mode: SaveMode) -> DlxResult<Vec<Board>> {
        self.check_input(board)?;
        Ok(self.run(board, limit, mode).0)
    }

    /// Counts the tilings of the given board up to `limit` (`None`
    /// meaning all of them) without materializing any boards.
    ///
    /// # Errors
    ///
    /// If the board's size differs from this solver's board width. In
    /// that case, `DlxError::InvalidDimensions` is returned.
    pub fn count_solutions(&mut self, board: &Board, limit: Option<usize>)
            -> DlxResult<usize> {
        self.check_input(board)?;
        Ok(self.run(board, limit, SaveMode::None).1)
    }
}
