//! The general `m x n` matrix, stored as a linked lattice of nodes.
//!
//! A grid owns an arena of [`Node`]s. Node 0 is the header; below it hangs a
//! chain of `m` row markers and to its right a chain of `n` column markers.
//! Every interior cell `(i, j)` is linked so that walking `i` steps down and
//! `j` steps right from the header reaches it, and so does walking `j` steps
//! right then `i` steps down. Indices are 1-based throughout.
use std::fmt;

use num_traits::Num;

use crate::error::{Axis, MatrixError, Result};
use crate::node::{Node, NodeId};
use crate::policy::{CellWrite, WritePolicy};
use crate::vector::OneDimensionalMatrix;

const HEAD: NodeId = NodeId::header();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Right,
    Down,
}

/// Follows `right` or `down` links starting at (and including) a node.
struct Walk<'a, T> {
    nodes: &'a [Node<T>],
    next: Option<NodeId>,
    direction: Direction,
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        let node = &self.nodes[id.index()];
        self.next = match self.direction {
            Direction::Right => node.right(),
            Direction::Down => node.down(),
        };
        Some(id)
    }
}

#[derive(Clone)]
pub struct Grid<T> {
    nodes: Vec<Node<T>>,
    rows: usize,
    cols: usize,
    policy: WritePolicy,
}

pub(crate) fn check_index(axis: Axis, index: usize, bound: usize) -> Result<()> {
    if index == 0 || index > bound {
        return Err(MatrixError::Index { axis, index, bound });
    }
    Ok(())
}

impl<T> Grid<T> {
    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    fn push(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    // Arena layout: header, row markers, column markers, interior row-major.
    fn row_marker(&self, row: usize) -> NodeId {
        NodeId::new(row)
    }

    fn col_marker(&self, col: usize) -> NodeId {
        NodeId::new(self.rows + col)
    }

    // Interior cells are pushed in the same order the row links visit them, so
    // this index always names the node a down-then-right walk would reach.
    #[inline]
    fn cell_id(&self, row: usize, col: usize) -> NodeId {
        NodeId::new(1 + self.rows + self.cols + (row - 1) * self.cols + (col - 1))
    }

    fn walk_from(&self, start: Option<NodeId>, direction: Direction) -> Walk<'_, T> {
        Walk {
            nodes: &self.nodes,
            next: start,
            direction,
        }
    }

    /// Interior nodes of a valid row, left to right.
    fn row_walk(&self, row: usize) -> Walk<'_, T> {
        let first = self.node(self.row_marker(row)).right();
        self.walk_from(first, Direction::Right)
    }

    /// Interior nodes of a valid column, top to bottom.
    fn col_walk(&self, col: usize) -> Walk<'_, T> {
        let first = self.node(self.col_marker(col)).down();
        self.walk_from(first, Direction::Down)
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        check_index(Axis::Row, row, self.rows)?;
        check_index(Axis::Column, col, self.cols)
    }

    /// The lattice node holding `(row, col)`.
    pub fn node_at(&self, row: usize, col: usize) -> Result<&Node<T>> {
        self.check_cell(row, col)?;
        Ok(self.node(self.cell_id(row, col)))
    }

    pub(crate) fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<T> Grid<T>
where
    T: Copy + Num,
{
    /// An `rows x cols` grid of zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    /// An `rows x cols` grid with every cell set to `default`.
    pub fn filled(rows: usize, cols: usize, default: T) -> Self {
        Self::build(rows, cols, |_, _| default)
    }

    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(values: Vec<Vec<T>>) -> Result<Self> {
        let rows = values.len();
        let cols = values.first().map_or(0, Vec::len);
        if let Some(bad) = values.iter().find(|row| row.len() != cols) {
            return Err(MatrixError::dimension("from_rows", cols, bad.len()));
        }
        Ok(Self::build(rows, cols, |i, j| values[i - 1][j - 1]))
    }

    /// Lay out the lattice: header, row markers, column markers, then each
    /// interior row linked onto the running row and column tails.
    pub(crate) fn build<F>(rows: usize, cols: usize, mut value: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        log::debug!("building {}x{} lattice", rows, cols);
        let mut grid = Self {
            nodes: Vec::with_capacity(1 + rows + cols + rows * cols),
            rows,
            cols,
            policy: WritePolicy::Unconstrained,
        };
        grid.push(Node::new(T::zero()));

        let mut tail = HEAD;
        for _ in 0..rows {
            let id = grid.push(Node::new(T::zero()));
            grid.node_mut(tail).set_down(id);
            tail = id;
        }

        let mut col_tails = Vec::with_capacity(cols);
        let mut tail = HEAD;
        for _ in 0..cols {
            let id = grid.push(Node::new(T::zero()));
            grid.node_mut(tail).set_right(id);
            col_tails.push(id);
            tail = id;
        }

        for i in 1..=rows {
            let mut left = grid.row_marker(i);
            for (j, col_tail) in col_tails.iter_mut().enumerate() {
                let id = grid.push(Node::new(value(i, j + 1)));
                grid.node_mut(left).set_right(id);
                grid.node_mut(*col_tail).set_down(id);
                left = id;
                *col_tail = id;
            }
        }
        grid
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_cell(row, col)?;
        Ok(self.value_at(row, col))
    }

    /// Write `value` at `(row, col)`, subject to this grid's write policy.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_cell(row, col)?;
        let writes = self.policy.plan(row, col, value)?;
        self.apply(&writes);
        Ok(())
    }

    fn apply(&mut self, writes: &[CellWrite<T>]) {
        for write in writes {
            let id = self.cell_id(write.row, write.col);
            self.node_mut(id).set_contents(write.value);
        }
    }

    pub(crate) fn value_at(&self, row: usize, col: usize) -> T {
        *self.node(self.cell_id(row, col)).contents()
    }

    /// Overwrite a valid cell, bypassing the policy. Callers must preserve its invariant.
    pub(crate) fn write_unchecked(&mut self, row: usize, col: usize, value: T) {
        let id = self.cell_id(row, col);
        self.node_mut(id).set_contents(value);
    }

    /// Values of row `row`, left to right, read by following the row's links.
    pub fn row_values(&self, row: usize) -> Result<impl Iterator<Item = T> + '_> {
        check_index(Axis::Row, row, self.rows)?;
        Ok(self.row_walk(row).map(move |id| *self.node(id).contents()))
    }

    /// Values of column `col`, top to bottom, read by following the column's links.
    pub fn col_values(&self, col: usize) -> Result<impl Iterator<Item = T> + '_> {
        check_index(Axis::Column, col, self.cols)?;
        Ok(self.col_walk(col).map(move |id| *self.node(id).contents()))
    }

    /// All interior values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        (1..=self.rows)
            .flat_map(move |row| self.row_walk(row))
            .map(move |id| *self.node(id).contents())
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (1..=self.rows)
            .map(|row| {
                self.row_walk(row)
                    .map(|id| *self.node(id).contents())
                    .collect()
            })
            .collect()
    }

    /// A fresh copy of row `row`.
    pub fn get_row(&self, row: usize) -> Result<OneDimensionalMatrix<T>> {
        Ok(self.row_values(row)?.collect())
    }

    /// A fresh copy of column `col`.
    pub fn get_col(&self, col: usize) -> Result<OneDimensionalMatrix<T>> {
        Ok(self.col_values(col)?.collect())
    }

    /// Validate and plan every requested write, then apply them all. Nothing is
    /// written if any request is rejected.
    pub(crate) fn set_all<I>(&mut self, requests: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut writes = Vec::new();
        for (row, col, value) in requests {
            self.check_cell(row, col)?;
            writes.extend(self.policy.plan(row, col, value)?);
        }
        self.apply(&writes);
        Ok(())
    }

    pub fn set_row(&mut self, row: usize, values: &OneDimensionalMatrix<T>) -> Result<()> {
        check_index(Axis::Row, row, self.rows)?;
        if values.len() != self.cols {
            return Err(MatrixError::dimension("set_row", self.cols, values.len()));
        }
        self.set_all(values.iter().enumerate().map(|(j, value)| (row, j + 1, value)))
    }

    pub fn set_col(&mut self, col: usize, values: &OneDimensionalMatrix<T>) -> Result<()> {
        check_index(Axis::Column, col, self.cols)?;
        if values.len() != self.rows {
            return Err(MatrixError::dimension("set_col", self.rows, values.len()));
        }
        self.set_all(values.iter().enumerate().map(|(i, value)| (i + 1, col, value)))
    }

    pub fn swap_rows(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(Axis::Row, first, self.rows)?;
        check_index(Axis::Row, second, self.rows)?;
        self.policy.check_swap(first, second)?;
        let upper = self.get_row(first)?;
        let lower = self.get_row(second)?;
        self.set_row(first, &lower)?;
        self.set_row(second, &upper)
    }

    pub fn swap_cols(&mut self, first: usize, second: usize) -> Result<()> {
        check_index(Axis::Column, first, self.cols)?;
        check_index(Axis::Column, second, self.cols)?;
        self.policy.check_swap(first, second)?;
        let left = self.get_col(first)?;
        let right = self.get_col(second)?;
        self.set_col(first, &right)?;
        self.set_col(second, &left)
    }

    /// Apply `f` to every interior cell, row by row along the links.
    fn update_all<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for row in 1..=self.rows {
            let ids: Vec<NodeId> = self.row_walk(row).collect();
            log::trace!("updating row {} ({} cells)", row, ids.len());
            for id in ids {
                let node = self.node_mut(id);
                let updated = f(*node.contents());
                node.set_contents(updated);
            }
        }
    }

    pub fn add_scalar(&mut self, value: T) -> Result<()> {
        self.policy.check_shift(value)?;
        self.update_all(|x| x + value);
        Ok(())
    }

    pub fn subtract_scalar(&mut self, value: T) -> Result<()> {
        self.policy.check_shift(value)?;
        self.update_all(|x| x - value);
        Ok(())
    }

    pub fn multiply_scalar(&mut self, value: T) -> Result<()> {
        self.policy.check_scale(value)?;
        self.update_all(|x| x * value);
        Ok(())
    }

    fn zip_with<F>(&self, other: &Grid<T>, operation: &'static str, f: F) -> Result<Grid<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::dimension(
                operation,
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }
        log::debug!("{} of two {}x{} matrices", operation, self.rows, self.cols);
        let values: Vec<T> = self
            .values()
            .zip(other.values())
            .map(|(a, b)| f(a, b))
            .collect();
        let cols = self.cols;
        Ok(Grid::build(self.rows, cols, |i, j| values[(i - 1) * cols + (j - 1)]))
    }

    /// Elementwise sum as a new grid. Neither operand changes.
    pub fn add_matrix(&self, other: &Grid<T>) -> Result<Grid<T>> {
        self.zip_with(other, "add_matrix", |a, b| a + b)
    }

    /// Elementwise difference as a new grid. Neither operand changes.
    pub fn subtract_matrix(&self, other: &Grid<T>) -> Result<Grid<T>> {
        self.zip_with(other, "subtract_matrix", |a, b| a - b)
    }

    /// Matrix product `self * other` as a new `self.nrows() x other.ncols()` grid.
    pub fn multiply_matrix(&self, other: &Grid<T>) -> Result<Grid<T>> {
        if self.cols != other.rows {
            return Err(MatrixError::dimension(
                "multiply_matrix",
                format!("{} rows on the right operand", self.cols),
                other.rows,
            ));
        }
        log::debug!(
            "multiplying {}x{} by {}x{}",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        let lhs = self.to_rows();
        let rhs: Vec<Vec<T>> = (1..=other.cols)
            .map(|col| other.col_values(col).map(Iterator::collect))
            .collect::<Result<_>>()?;
        Ok(Grid::build(self.rows, other.cols, |i, j| {
            lhs[i - 1]
                .iter()
                .zip(&rhs[j - 1])
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
        }))
    }
}

impl<T> PartialEq for Grid<T>
where
    T: Copy + Num,
{
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.values().eq(other.values())
    }
}

impl<T> fmt::Debug for Grid<T>
where
    T: Copy + Num + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("shape", &self.shape())
            .field("policy", &self.policy)
            .field("rows", &self.to_rows())
            .finish()
    }
}

impl<T> fmt::Display for Grid<T>
where
    T: Copy + Num + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.rows {
            if row > 1 {
                writeln!(f)?;
            }
            for (j, id) in self.row_walk(row).enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.node(id))?;
            }
        }
        Ok(())
    }
}
