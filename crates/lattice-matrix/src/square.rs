//! Square matrices and the symmetric, diagonal and identity variants.
//!
//! The variants share storage with [`SquareMatrix`]; each one only installs a
//! different [`WritePolicy`] on the underlying grid, so every write made
//! through any handle (including `set_row`, `set_diagonal` or a plain `set`)
//! obeys the variant's invariant. Reads deref down to the grid; there is no
//! mutable deref, so neither the policy nor the shape can be swapped out.
use std::fmt;
use std::ops::Deref;

use num_traits::Num;

use crate::error::{MatrixError, Result};
use crate::grid::Grid;
use crate::policy::WritePolicy;
use crate::vector::OneDimensionalMatrix;

/// An `n x n` grid.
///
/// ```compile_fail
/// use lattice_matrix::{Grid, SymmetricMatrix};
///
/// let mut sym: SymmetricMatrix<i32> = SymmetricMatrix::new(3);
/// let grid: &mut Grid<i32> = &mut sym;
/// *grid = Grid::new(3, 2);
/// ```
#[derive(Clone)]
pub struct SquareMatrix<T> {
    grid: Grid<T>,
}

impl<T> SquareMatrix<T>
where
    T: Copy + Num,
{
    /// A `size x size` matrix of zeros.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size, size),
        }
    }

    pub fn from_rows(values: Vec<Vec<T>>) -> Result<Self> {
        Self::try_from(Grid::from_rows(values)?)
    }

    fn with_policy(grid: Grid<T>, policy: WritePolicy) -> Self {
        Self {
            grid: grid.with_policy(policy),
        }
    }

    pub fn size(&self) -> usize {
        self.grid.nrows()
    }

    forward_grid_mutators!(grid);

    /// Transpose in place.
    ///
    /// All values are read out before any cell is overwritten.
    pub fn transpose(&mut self) {
        let snapshot = self.grid.to_rows();
        let size = self.size();
        for i in 1..=size {
            for j in 1..=size {
                // Every variant's invariant is closed under transposition.
                self.grid.write_unchecked(i, j, snapshot[j - 1][i - 1]);
            }
        }
    }

    pub fn get_diagonal(&self) -> OneDimensionalMatrix<T> {
        (1..=self.size())
            .map(|k| self.grid.value_at(k, k))
            .collect()
    }

    /// Overwrite the diagonal with `values`; off-diagonal cells are untouched.
    pub fn set_diagonal(&mut self, values: &OneDimensionalMatrix<T>) -> Result<()> {
        if values.len() != self.size() {
            return Err(MatrixError::dimension(
                "set_diagonal",
                self.size(),
                values.len(),
            ));
        }
        self.grid
            .set_all(values.iter().enumerate().map(|(k, value)| (k + 1, k + 1, value)))
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        self.get_diagonal()
            .iter()
            .fold(T::zero(), |acc, value| acc + value)
    }

    pub fn as_grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }
}

impl<T> TryFrom<Grid<T>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(grid: Grid<T>) -> Result<Self> {
        if !grid.is_square() {
            return Err(MatrixError::dimension(
                "square matrix",
                format!("{0}x{0}", grid.nrows()),
                format!("{}x{}", grid.nrows(), grid.ncols()),
            ));
        }
        Ok(Self { grid })
    }
}

impl<T> Deref for SquareMatrix<T> {
    type Target = Grid<T>;

    fn deref(&self) -> &Grid<T> {
        &self.grid
    }
}

impl<T> PartialEq for SquareMatrix<T>
where
    T: Copy + Num,
{
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl<T> fmt::Debug for SquareMatrix<T>
where
    T: Copy + Num + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.grid, f)
    }
}

impl<T> fmt::Display for SquareMatrix<T>
where
    T: Copy + Num + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

macro_rules! square_variant {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name<T>(SquareMatrix<T>);

        impl<T> PartialEq for $name<T>
        where
            T: Copy + Num,
        {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl<T> $name<T> {
            pub fn as_square(&self) -> &SquareMatrix<T> {
                &self.0
            }

            pub fn into_square(self) -> SquareMatrix<T> {
                self.0
            }
        }

        impl<T> Deref for $name<T> {
            type Target = SquareMatrix<T>;

            fn deref(&self) -> &SquareMatrix<T> {
                &self.0
            }
        }

        impl<T> $name<T>
        where
            T: Copy + Num,
        {
            forward_grid_mutators!(0);

            pub fn transpose(&mut self) {
                self.0.transpose()
            }

            pub fn set_diagonal(&mut self, values: &OneDimensionalMatrix<T>) -> Result<()> {
                self.0.set_diagonal(values)
            }
        }

        impl<T> fmt::Debug for $name<T>
        where
            T: Copy + Num + fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl<T> fmt::Display for $name<T>
        where
            T: Copy + Num + fmt::Display,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

square_variant!(
    /// A square matrix whose writes are mirrored, so `m[i, j] == m[j, i]` always holds.
    SymmetricMatrix
);

square_variant!(
    /// A square matrix whose off-diagonal entries are always zero.
    DiagonalMatrix
);

square_variant!(
    /// Ones on the diagonal, zeros elsewhere. Only writes that keep it that way are accepted.
    IdentityMatrix
);

impl<T> SymmetricMatrix<T>
where
    T: Copy + Num,
{
    pub fn new(size: usize) -> Self {
        Self(SquareMatrix::with_policy(
            Grid::new(size, size),
            WritePolicy::Symmetric,
        ))
    }

    /// Adopt `values` as-is; they must already be symmetric.
    pub fn from_rows(values: Vec<Vec<T>>) -> Result<Self> {
        let square = SquareMatrix::from_rows(values)?;
        let size = square.size();
        for i in 1..=size {
            for j in (i + 1)..=size {
                if square.value_at(i, j) != square.value_at(j, i) {
                    return Err(MatrixError::invalid(
                        WritePolicy::Symmetric.name(),
                        format!("entries ({0}, {1}) and ({1}, {0}) differ", i, j),
                    ));
                }
            }
        }
        Ok(Self(SquareMatrix::with_policy(
            square.into_grid(),
            WritePolicy::Symmetric,
        )))
    }
}

impl<T> DiagonalMatrix<T>
where
    T: Copy + Num,
{
    pub fn new(size: usize) -> Self {
        Self(SquareMatrix::with_policy(
            Grid::new(size, size),
            WritePolicy::Diagonal,
        ))
    }

    /// Adopt `values` as-is; every off-diagonal entry must be zero.
    pub fn from_rows(values: Vec<Vec<T>>) -> Result<Self> {
        let square = SquareMatrix::from_rows(values)?;
        let size = square.size();
        for i in 1..=size {
            for j in (1..=size).filter(|&j| j != i) {
                if square.value_at(i, j) != T::zero() {
                    return Err(MatrixError::invalid(
                        WritePolicy::Diagonal.name(),
                        format!("off-diagonal entry ({}, {}) is not zero", i, j),
                    ));
                }
            }
        }
        Ok(Self(SquareMatrix::with_policy(
            square.into_grid(),
            WritePolicy::Diagonal,
        )))
    }

    pub fn from_diagonal(values: &OneDimensionalMatrix<T>) -> Self {
        let diagonal = values.to_vec();
        let grid = Grid::build(diagonal.len(), diagonal.len(), |i, j| {
            if i == j {
                diagonal[i - 1]
            } else {
                T::zero()
            }
        });
        Self(SquareMatrix::with_policy(grid, WritePolicy::Diagonal))
    }
}

impl<T> IdentityMatrix<T>
where
    T: Copy + Num,
{
    pub fn new(size: usize) -> Self {
        log::debug!("building {0}x{0} identity", size);
        let grid = Grid::build(size, size, |i, j| if i == j { T::one() } else { T::zero() });
        Self(SquareMatrix::with_policy(grid, WritePolicy::Identity))
    }
}
