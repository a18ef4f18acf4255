//! This module contains the sparse 0/1 matrix on which the search engine
//! operates, stored as a four-way linked mesh in the dancing-links style.
//!
//! All nodes and headers live in flat arenas owned by the [DlxMatrix];
//! links between them are plain indices. The mesh is mutated exclusively
//! by the cover and uncover operations defined here, which splice nodes
//! out of their columns and relink them in the exact reverse order, so
//! that a sequence of covers followed by the mirrored sequence of
//! uncovers restores the matrix bit for bit.

use crate::headers::HeaderIndex;

/// One 1-bit of the matrix. The left/right links form the circular ring
/// of the node's row, the up/down links the circular ring of its column.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Node {
    pub(crate) left: usize,
    pub(crate) right: usize,
    pub(crate) up: usize,
    pub(crate) down: usize,
    pub(crate) header: usize,
    pub(crate) row: usize
}

/// One column of the matrix. `top` and `bottom` point at the live nodes
/// with the smallest and largest row index, or are both `None` for an
/// emptied column.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Header {
    pub(crate) count: usize,
    pub(crate) top: Option<usize>,
    pub(crate) bottom: Option<usize>
}

/// The linked sparse matrix of an exact cover problem. Columns with an
/// index of at least `optional_start` are optional, that is, they may be
/// covered at most once but do not need to be covered for a solution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DlxMatrix {
    headers: Vec<Header>,
    nodes: Vec<Node>,
    row_starts: Vec<usize>,
    optional_start: usize
}

impl DlxMatrix {

    /// Builds a matrix with `rows` rows of exactly `constraints_per_row`
    /// ones each. `column_for(row, k)` yields the column of the `k`-th one
    /// of the given row and `initial_count(column)` the total number of
    /// ones in the given column. Column rings are linked in increasing row
    /// order.
    pub(crate) fn generate(rows: usize, width: usize,
            constraints_per_row: usize, optional_start: usize,
            initial_count: impl Fn(usize) -> usize,
            column_for: impl Fn(usize, usize) -> usize) -> DlxMatrix {
        let mut matrix = DlxMatrix {
            headers: (0..width)
                .map(|column| Header {
                    count: initial_count(column),
                    top: None,
                    bottom: None
                })
                .collect(),
            nodes: Vec::with_capacity(rows * constraints_per_row),
            row_starts: Vec::with_capacity(rows),
            optional_start
        };

        for row in 0..rows {
            let columns: Vec<usize> = (0..constraints_per_row)
                .map(|k| column_for(row, k))
                .collect();
            matrix.push_row(row, &columns, false);
        }

        debug_assert!(matrix.headers
            .iter()
            .enumerate()
            .all(|(column, header)| {
                header.count == matrix.nodes
                    .iter()
                    .filter(|node| node.header == column)
                    .count()
            }));

        matrix
    }

    /// Builds a matrix from rows of varying arity, each given as the list
    /// of columns it covers. Header counts are accumulated while linking.
    pub(crate) fn from_sparse_rows(width: usize, optional_start: usize,
            rows: &[Vec<usize>]) -> DlxMatrix {
        let mut matrix = DlxMatrix {
            headers: vec![Header { count: 0, top: None, bottom: None };
                width],
            nodes: Vec::new(),
            row_starts: Vec::with_capacity(rows.len()),
            optional_start
        };

        for (row, columns) in rows.iter().enumerate() {
            matrix.push_row(row, columns, true);
        }

        matrix
    }

    /// Appends the nodes of one row, linking them into a circular ring and
    /// into their columns below every previously inserted row.
    fn push_row(&mut self, row: usize, columns: &[usize],
            accumulate_counts: bool) {
        let base = self.nodes.len();
        let len = columns.len();
        self.row_starts.push(base);

        for (k, &column) in columns.iter().enumerate() {
            let index = base + k;
            let right = if k == len - 1 { base } else { index + 1 };
            let left = if k == 0 { base + len - 1 } else { index - 1 };
            let mut node = Node {
                left,
                right,
                up: index,
                down: index,
                header: column,
                row
            };

            match self.headers[column].top {
                None => {
                    self.headers[column].top = Some(index);
                    self.headers[column].bottom = Some(index);
                }
                Some(top) => {
                    let bottom = self.headers[column].bottom
                        .expect("populated column without bottom");
                    node.up = bottom;
                    node.down = top;
                    self.nodes[bottom].down = index;
                    self.nodes[top].up = index;
                    self.headers[column].bottom = Some(index);
                }
            }

            if accumulate_counts {
                self.headers[column].count += 1;
            }

            self.nodes.push(node);
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.headers.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.row_starts.len()
    }

    pub(crate) fn header(&self, column: usize) -> &Header {
        &self.headers[column]
    }

    pub(crate) fn header_of(&self, node: usize) -> usize {
        self.nodes[node].header
    }

    pub(crate) fn row_of(&self, node: usize) -> usize {
        self.nodes[node].row
    }

    /// Returns the index of the first node of the given matrix row.
    pub(crate) fn row_start(&self, row: usize) -> usize {
        self.row_starts[row]
    }

    pub(crate) fn down(&self, node: usize) -> usize {
        self.nodes[node].down
    }

    pub(crate) fn right(&self, node: usize) -> usize {
        self.nodes[node].right
    }

    /// Indicates whether the given node has been spliced out of its
    /// column, that is, its vertical neighbours no longer link back to it.
    pub(crate) fn is_detached(&self, node: usize) -> bool {
        self.nodes[self.nodes[node].up].down != node
    }

    /// Populates a fresh header index containing every column of the
    /// matrix under its current count.
    pub(crate) fn build_index(&self) -> HeaderIndex {
        let mut index = HeaderIndex::new(self.optional_start);

        for (column, header) in self.headers.iter().enumerate() {
            index.insert(column, header.count);
        }

        index
    }

    /// Splices the given node out of its column, advancing the column's
    /// top or bottom past it where necessary and re-keying the header in
    /// the index under its decremented count.
    fn remove_from_column(&mut self, node: usize, index: &mut HeaderIndex) {
        let column = self.nodes[node].header;
        let count = self.headers[column].count;
        index.remove(column, count);
        let count = count - 1;
        self.headers[column].count = count;

        if count == 0 {
            self.headers[column].top = None;
            self.headers[column].bottom = None;
        }
        else {
            if self.headers[column].top == Some(node) {
                self.headers[column].top = Some(self.nodes[node].down);
            }
            else if self.headers[column].bottom == Some(node) {
                self.headers[column].bottom = Some(self.nodes[node].up);
            }

            let up = self.nodes[node].up;
            let down = self.nodes[node].down;
            self.nodes[up].down = down;
            self.nodes[down].up = up;
        }

        index.insert(column, count);
    }

    /// Exact reverse of [DlxMatrix::remove_from_column]: relinks the node
    /// into its column, restores top and bottom and re-keys the header
    /// under its incremented count.
    fn restore_to_column(&mut self, node: usize, index: &mut HeaderIndex) {
        let column = self.nodes[node].header;
        let count = self.headers[column].count;
        index.remove(column, count);

        if count == 0 {
            self.headers[column].top = Some(node);
            self.headers[column].bottom = Some(node);
        }
        else {
            let up = self.nodes[node].up;
            let down = self.nodes[node].down;
            self.nodes[up].down = node;
            self.nodes[down].up = node;

            if let (Some(top), Some(bottom)) =
                    (self.headers[column].top, self.headers[column].bottom) {
                let row = self.nodes[node].row;

                if row > self.nodes[bottom].row {
                    self.headers[column].bottom = Some(node);
                }
                else if row < self.nodes[top].row {
                    self.headers[column].top = Some(node);
                }
            }
        }

        self.headers[column].count = count + 1;
        index.insert(column, count + 1);
    }

    /// Removes every other node of the given node's row from its column,
    /// walking the row rightward.
    fn detach_row_siblings(&mut self, node: usize, index: &mut HeaderIndex) {
        let mut sibling = self.nodes[node].right;

        while sibling != node {
            self.remove_from_column(sibling, index);
            sibling = self.nodes[sibling].right;
        }
    }

    /// Exact reverse of [DlxMatrix::detach_row_siblings], walking the row
    /// leftward.
    fn attach_row_siblings(&mut self, node: usize, index: &mut HeaderIndex) {
        let mut sibling = self.nodes[node].left;

        while sibling != node {
            self.restore_to_column(sibling, index);
            sibling = self.nodes[sibling].left;
        }
    }

    /// Covers the column of `seed`: every row intersecting the column,
    /// except the seed's own row, is removed from all other columns it
    /// touches. The seed node itself stays linked as the place-holder by
    /// which [DlxMatrix::uncover_column] finds the column back. Removing
    /// the seed's header from the index is the caller's responsibility.
    pub(crate) fn cover_column(&mut self, seed: usize,
            index: &mut HeaderIndex) {
        let mut node = self.nodes[seed].down;

        while node != seed {
            self.detach_row_siblings(node, index);
            node = self.nodes[node].down;
        }
    }

    /// Exact reverse of [DlxMatrix::cover_column]: walks the column upward
    /// and each row leftward, relinking in the reverse of the cover order.
    pub(crate) fn uncover_column(&mut self, seed: usize,
            index: &mut HeaderIndex) {
        let mut node = self.nodes[seed].up;

        while node != seed {
            self.attach_row_siblings(node, index);
            node = self.nodes[node].up;
        }
    }

    /// Covers the column of every node of the seed's row except the seed's
    /// own, removing each header from the index first. This is how a
    /// chosen row consumes all the constraints it satisfies.
    pub(crate) fn cover_row(&mut self, seed: usize,
            index: &mut HeaderIndex) {
        let mut node = self.nodes[seed].right;

        while node != seed {
            let column = self.nodes[node].header;
            index.remove(column, self.headers[column].count);
            self.cover_column(node, index);
            node = self.nodes[node].right;
        }
    }

    /// Exact reverse of [DlxMatrix::cover_row].
    pub(crate) fn uncover_row(&mut self, seed: usize,
            index: &mut HeaderIndex) {
        let mut node = self.nodes[seed].left;

        while node != seed {
            self.uncover_column(node, index);
            let column = self.nodes[node].header;
            index.insert(column, self.headers[column].count);
            node = self.nodes[node].left;
        }
    }

    /// Covers the given column including the seed position: every row
    /// intersecting the column is removed. No row is chosen by this
    /// operation; it is used for board cells that are occupied before the
    /// search starts. Removing the header from the index is the caller's
    /// responsibility.
    pub(crate) fn cover_column_full(&mut self, column: usize,
            index: &mut HeaderIndex) {
        let top = match self.headers[column].top {
            Some(top) => top,
            None => return
        };
        let mut node = top;

        loop {
            self.detach_row_siblings(node, index);
            node = self.nodes[node].down;

            if node == top {
                break;
            }
        }
    }

    /// Exact reverse of [DlxMatrix::cover_column_full].
    pub(crate) fn uncover_column_full(&mut self, column: usize,
            index: &mut HeaderIndex) {
        let top = match self.headers[column].top {
            Some(top) => top,
            None => return
        };
        let mut node = self.nodes[top].up;

        loop {
            self.attach_row_siblings(node, index);

            if node == top {
                break;
            }

            node = self.nodes[node].up;
        }
    }
}
