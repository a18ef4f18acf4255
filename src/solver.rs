//! This module contains the search engine which all puzzle front ends
//! share: a depth-first implementation of Knuth's Algorithm X over a
//! linked sparse matrix, driven by a minimum-remaining-values column pick
//! from an ordered index of the active column headers.
//!
//! The engine maintains a stack of choices, each pairing the picked
//! column header with the row node currently tried for it. Covering is
//! destructive but reversible: every exit path, including aborted
//! initializations and early termination through a solution limit,
//! unwinds all covers in exact reverse order, so a solver can be reused
//! for any number of searches.

use crate::headers::HeaderIndex;
use crate::matrix::DlxMatrix;

use log::{debug, warn};

use serde::{Deserialize, Serialize};

/// Determines which intermediate states a search records in its output
/// list.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {

    /// Record one output per completed solution.
    Solutions,

    /// On each completed solution, record one output for every prefix of
    /// the choice stack, from the first choice up to the full solution.
    /// This reproduces the partial boards along the successful path and
    /// can enlarge the output quadratically; it is a diagnostic mode.
    CorrectMoves,

    /// Record an output after every choice the solver makes, including
    /// the replacements performed while backtracking. This traces the
    /// entire trajectory of the search and is by far the slowest mode;
    /// it is a diagnostic mode.
    AllMoves,

    /// Record nothing, which is useful for counting the solutions of a
    /// problem as quickly as possible.
    None
}

/// One entry of the choice stack: the picked header and the node of the
/// row currently tried for it, with the row index cached for result
/// interpretation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Choice {
    pub(crate) header: usize,
    pub(crate) node: usize,
    pub(crate) row: usize
}

/// A cover applied during initialization, before the search proper. These
/// are unwound last, after the choice stack.
#[derive(Clone, Copy, Debug)]
enum Preset {

    /// One node of a pre-committed row whose column has been covered and
    /// whose header has been removed from the index.
    GivenNode(usize),

    /// A column that was covered in full, without committing any row.
    OccupiedColumn(usize)
}

/// The state of one search over a [DlxMatrix]. Constructed per solve
/// call; [Search::run] and [Search::abort] both leave the matrix in its
/// pristine state.
pub(crate) struct Search<'a> {
    matrix: &'a mut DlxMatrix,
    index: HeaderIndex,
    stack: Vec<Choice>,
    presets: Vec<Preset>
}

impl<'a> Search<'a> {

    pub(crate) fn new(matrix: &'a mut DlxMatrix) -> Search<'a> {
        let index = matrix.build_index();

        Search {
            matrix,
            index,
            stack: Vec::new(),
            presets: Vec::new()
        }
    }

    /// Commits the given matrix row before the search starts, covering
    /// all of its columns as if the row had been chosen by the search
    /// itself. Returns `false` if the input is over-constrained, that is,
    /// the row conflicts with a previously committed row or some
    /// mandatory column has run out of candidates. In that case the
    /// caller must [abort](Search::abort) the search.
    pub(crate) fn cover_given_row(&mut self, row: usize) -> bool {
        let start = self.matrix.row_start(row);

        // A row that shares a column with a previously committed row has
        // been spliced out of its other columns, or had the shared header
        // covered outright. Such a row must be rejected before any of its
        // columns is covered, or the mesh would no longer be restorable.
        let mut node = start;

        loop {
            let column = self.matrix.header_of(node);
            let count = self.matrix.header(column).count;

            if self.matrix.is_detached(node)
                    || !self.index.contains(column, count) {
                return false;
            }

            node = self.matrix.right(node);

            if node == start {
                break;
            }
        }

        let mut node = start;

        loop {
            if let Some((0, _)) = self.index.min_mandatory() {
                return false;
            }

            let column = self.matrix.header_of(node);
            self.index.remove(column, self.matrix.header(column).count);
            self.matrix.cover_column(node, &mut self.index);
            self.presets.push(Preset::GivenNode(node));
            node = self.matrix.right(node);

            if node == start {
                break;
            }
        }

        true
    }

    /// Covers the given column in full before the search starts, without
    /// committing any row, so that no remaining row may cover it. This is
    /// used for board cells that are occupied from the outset. Returns
    /// `false` if a mandatory column has already run out of candidates,
    /// in which case the caller must [abort](Search::abort) the search.
    pub(crate) fn cover_occupied_column(&mut self, column: usize) -> bool {
        if let Some((0, _)) = self.index.min_mandatory() {
            return false;
        }

        let count = self.matrix.header(column).count;

        if !self.index.contains(column, count) {
            return false;
        }

        self.index.remove(column, count);
        self.matrix.cover_column_full(column, &mut self.index);
        self.presets.push(Preset::OccupiedColumn(column));
        true
    }

    /// Uncovers everything this search has covered, in exact reverse
    /// order, returning the matrix to the state it had when the search
    /// was created.
    fn unwind(&mut self) {
        while let Some(choice) = self.stack.pop() {
            self.matrix.uncover_row(choice.node, &mut self.index);
            self.matrix.uncover_column(choice.node, &mut self.index);
            self.index.insert(choice.header,
                self.matrix.header(choice.header).count);
        }

        while let Some(preset) = self.presets.pop() {
            match preset {
                Preset::GivenNode(node) => {
                    self.matrix.uncover_column(node, &mut self.index);
                    let column = self.matrix.header_of(node);
                    self.index.insert(column,
                        self.matrix.header(column).count);
                }
                Preset::OccupiedColumn(column) => {
                    self.matrix.uncover_column_full(column, &mut self.index);
                    self.index.insert(column,
                        self.matrix.header(column).count);
                }
            }
        }
    }

    /// Abandons the search before running it, restoring the matrix.
    pub(crate) fn abort(mut self) {
        self.unwind();
    }

    /// Runs the search until `limit` solutions have been found (`None`
    /// meaning all of them) or the space is exhausted. Every recorded
    /// state is translated by `interpret`, which receives the choice
    /// stack, deepest choice last. Returns the recorded outputs and the
    /// number of solutions encountered, which only differ in length for
    /// the diagnostic [SaveMode]s.
    pub(crate) fn run<O>(mut self, limit: Option<usize>, mode: SaveMode,
            interpret: impl Fn(&[Choice]) -> O) -> (Vec<O>, usize) {
        let limit = limit.unwrap_or(usize::MAX);
        let mut outputs = Vec::new();
        let mut found = 0usize;
        let mut attempts = 0u64;

        debug!("starting search over {} rows and {} columns",
            self.matrix.len(), self.matrix.width());

        while found < limit {
            let dead_end = match self.index.min_mandatory() {
                None => false,
                Some((count, _)) => count == 0
            };

            if self.index.mandatory_is_empty() || dead_end {
                if !dead_end {
                    match mode {
                        SaveMode::Solutions =>
                            outputs.push(interpret(&self.stack)),
                        SaveMode::CorrectMoves =>
                            for depth in 1..=self.stack.len() {
                                outputs.push(interpret(&self.stack[..depth]));
                            }
                        SaveMode::AllMoves | SaveMode::None => { }
                    }

                    found += 1;
                }

                // Pop every choice whose column has no untried row left.
                while let Some(&choice) = self.stack.last() {
                    if self.matrix.header(choice.header).bottom
                            != Some(choice.node) {
                        break;
                    }

                    self.matrix.uncover_row(choice.node, &mut self.index);
                    self.matrix.uncover_column(choice.node, &mut self.index);
                    self.index.insert(choice.header,
                        self.matrix.header(choice.header).count);
                    self.stack.pop();
                }

                let choice = match self.stack.last() {
                    Some(&choice) => choice,
                    None => break
                };

                // Replace the top choice with the next row of its column.
                attempts += 1;
                let next = self.matrix.down(choice.node);
                self.matrix.uncover_row(choice.node, &mut self.index);
                self.matrix.uncover_column(choice.node, &mut self.index);
                self.matrix.cover_column(next, &mut self.index);
                self.matrix.cover_row(next, &mut self.index);
                let replaced = Choice {
                    header: choice.header,
                    node: next,
                    row: self.matrix.row_of(next)
                };
                *self.stack.last_mut().unwrap() = replaced;

                if mode == SaveMode::AllMoves {
                    outputs.push(interpret(&self.stack));
                }
            }
            else {
                // Descend into the mandatory column with the fewest
                // remaining candidates.
                attempts += 1;
                let (count, header) = self.index.min_mandatory().unwrap();
                let node = self.matrix.header(header).top
                    .expect("column with positive count has no top");
                self.stack.push(Choice {
                    header,
                    node,
                    row: self.matrix.row_of(node)
                });
                self.index.remove(header, count);
                self.matrix.cover_column(node, &mut self.index);
                self.matrix.cover_row(node, &mut self.index);

                if mode == SaveMode::AllMoves {
                    outputs.push(interpret(&self.stack));
                }
            }
        }

        if found == 0 && limit > 0 {
            warn!("search space exhausted without finding a solution");
        }

        debug!("search tried {} states and found {} solutions", attempts,
            found);
        self.unwind();
        (outputs, found)
    }
}
