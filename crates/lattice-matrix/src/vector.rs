use std::fmt;
use std::ops::Deref;

use num_traits::Num;

use crate::error::{MatrixError, Result};
use crate::grid::Grid;

/// A `1 x n` grid read as a vector. Items are 1-indexed.
///
/// Reads deref to the underlying [`Grid`]; writes go through the methods
/// below, so the vector always keeps its single row.
///
/// ```compile_fail
/// use lattice_matrix::{Grid, OneDimensionalMatrix};
///
/// let mut v: OneDimensionalMatrix<i32> = OneDimensionalMatrix::new(3);
/// let grid: &mut Grid<i32> = &mut v;
/// *grid = Grid::new(4, 4);
/// ```
#[derive(Clone)]
pub struct OneDimensionalMatrix<T> {
    grid: Grid<T>,
}

impl<T> OneDimensionalMatrix<T>
where
    T: Copy + Num,
{
    /// A zero vector of length `len`.
    pub fn new(len: usize) -> Self {
        Self {
            grid: Grid::new(1, len),
        }
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            grid: Grid::build(1, len, |_, j| values[j - 1]),
        }
    }

    pub fn from_elem(len: usize, value: T) -> Self {
        Self {
            grid: Grid::filled(1, len, value),
        }
    }

    pub fn len(&self) -> usize {
        self.grid.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_item(&self, index: usize) -> Result<T> {
        self.grid.get(1, index)
    }

    pub fn set_item(&mut self, index: usize, value: T) -> Result<()> {
        self.grid.set(1, index, value)
    }

    forward_grid_mutators!(grid);

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.grid.values()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Sum of elementwise products with `other`.
    pub fn dot(&self, other: &Self) -> Result<T> {
        if self.len() != other.len() {
            return Err(MatrixError::dimension("dot", self.len(), other.len()));
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a * b))
    }

    pub fn as_grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }
}

impl<T> Deref for OneDimensionalMatrix<T> {
    type Target = Grid<T>;

    fn deref(&self) -> &Grid<T> {
        &self.grid
    }
}

impl<T> TryFrom<Grid<T>> for OneDimensionalMatrix<T> {
    type Error = MatrixError;

    fn try_from(grid: Grid<T>) -> Result<Self> {
        if grid.nrows() != 1 {
            return Err(MatrixError::dimension("one-dimensional view", 1, grid.nrows()));
        }
        Ok(Self { grid })
    }
}

impl<T> From<Vec<T>> for OneDimensionalMatrix<T>
where
    T: Copy + Num,
{
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T> FromIterator<T> for OneDimensionalMatrix<T>
where
    T: Copy + Num,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> PartialEq for OneDimensionalMatrix<T>
where
    T: Copy + Num,
{
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl<T> fmt::Debug for OneDimensionalMatrix<T>
where
    T: Copy + Num + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for OneDimensionalMatrix<T>
where
    T: Copy + Num + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
