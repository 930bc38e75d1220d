//! lattice-matrix: matrix algebra on a linked lattice of nodes.
//!
//! A [`Grid`] owns an `(m + 1) x (n + 1)` lattice: a header node, a chain of
//! row markers, a chain of column markers and the `m x n` interior cells,
//! each linked to its right and lower neighbour. Indices are 1-based.
//!
//! On top of the general grid sit [`OneDimensionalMatrix`], [`SquareMatrix`]
//! and the square variants [`SymmetricMatrix`], [`DiagonalMatrix`] and
//! [`IdentityMatrix`]. The variants do not change storage; they install a
//! [`WritePolicy`] that decides what each write actually does.
//!
//! Binary operators (`add_matrix`, `multiply_matrix`, ...) never touch their
//! operands and return a new general grid.
#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod grid;
pub mod node;
pub mod policy;
pub mod prelude;
pub mod square;
pub mod vector;

pub use error::{Axis, MatrixError, Result};
pub use grid::Grid;
pub use node::{Node, NodeId};
pub use policy::{CellWrite, WritePolicy};
pub use square::{DiagonalMatrix, IdentityMatrix, SquareMatrix, SymmetricMatrix};
pub use vector::OneDimensionalMatrix;
