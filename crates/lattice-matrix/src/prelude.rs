//! Convenient prelude: the matrix types and the crate's error type.
//!
//! ```rust
//! use lattice_matrix::prelude::*;
//!
//! let mut m: Grid<i32> = Grid::new(2, 3);
//! m.set(2, 3, 7).unwrap();
//! assert_eq!(m.get_row(2).unwrap().to_vec(), vec![0, 0, 7]);
//! ```
pub use crate::error::{MatrixError, Result};
pub use crate::grid::Grid;
pub use crate::square::{DiagonalMatrix, IdentityMatrix, SquareMatrix, SymmetricMatrix};
pub use crate::vector::OneDimensionalMatrix;
