use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::error::MatrixError;
use crate::grid::Grid;
use crate::square::{DiagonalMatrix, IdentityMatrix, SquareMatrix, SymmetricMatrix};
use crate::vector::OneDimensionalMatrix;

/// Matrix kinds that can be described in a configuration file.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatrixKind {
    #[default]
    General,
    Square,
    Symmetric,
    Diagonal,
    Identity,
}

impl MatrixKind {
    pub fn is_square(&self) -> bool {
        !matches!(self, MatrixKind::General)
    }
}

impl FromStr for MatrixKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" | "matrix" => Ok(MatrixKind::General),
            "square" => Ok(MatrixKind::Square),
            "symmetric" => Ok(MatrixKind::Symmetric),
            "diagonal" => Ok(MatrixKind::Diagonal),
            "identity" => Ok(MatrixKind::Identity),
            _ => Err(format!(
                "Unknown matrix kind: {}. Expected one of general, square, symmetric, diagonal, identity",
                s
            )),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("matrix config needs `{0}` when no values are given")]
    MissingDimension(&'static str),

    #[error("a {kind:?} matrix must be square, got {rows}x{cols}")]
    NotSquare {
        kind: MatrixKind,
        rows: usize,
        cols: usize,
    },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Declarative description of one matrix operand.
///
/// Either `values` (nested rows) or the dimensions must be present. For the
/// square kinds `rows` is the size and `cols` may be omitted.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct MatrixConfig {
    pub kind: MatrixKind,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub default: f64,
    pub values: Option<Vec<Vec<f64>>>,
}

impl MatrixConfig {
    pub fn new(kind: MatrixKind, rows: usize, cols: usize) -> Self {
        Self {
            kind,
            rows: Some(rows),
            cols: Some(cols),
            ..Self::default()
        }
    }

    pub fn from_values(kind: MatrixKind, values: Vec<Vec<f64>>) -> Self {
        Self {
            kind,
            values: Some(values),
            ..Self::default()
        }
    }

    fn dimensions(&self) -> Result<(usize, usize), ConfigError> {
        if let Some(values) = &self.values {
            let rows = values.len();
            let cols = values.first().map_or(0, Vec::len);
            return Ok((rows, cols));
        }
        let rows = self.rows.ok_or(ConfigError::MissingDimension("rows"))?;
        let cols = match self.cols {
            Some(cols) => cols,
            None if self.kind.is_square() => rows,
            None => return Err(ConfigError::MissingDimension("cols")),
        };
        Ok((rows, cols))
    }

    /// Build the described matrix. Constrained kinds keep their write policy.
    pub fn build(&self) -> Result<Grid<f64>, ConfigError> {
        let (rows, cols) = self.dimensions()?;
        if let Some(values) = &self.values {
            if self.rows.is_some_and(|r| r != rows) || self.cols.is_some_and(|c| c != cols) {
                return Err(MatrixError::dimension(
                    "matrix config",
                    format!("{}x{}", self.rows.unwrap_or(rows), self.cols.unwrap_or(cols)),
                    format!("{}x{}", rows, cols),
                )
                .into());
            }
            if self.kind.is_square() && rows != cols {
                return Err(ConfigError::NotSquare {
                    kind: self.kind,
                    rows,
                    cols,
                });
            }
            let values = values.clone();
            let grid = match self.kind {
                MatrixKind::General => Grid::from_rows(values)?,
                MatrixKind::Square => SquareMatrix::from_rows(values)?.into_grid(),
                MatrixKind::Symmetric => SymmetricMatrix::from_rows(values)?
                    .into_square()
                    .into_grid(),
                MatrixKind::Diagonal => DiagonalMatrix::from_rows(values)?
                    .into_square()
                    .into_grid(),
                MatrixKind::Identity => {
                    let identity = IdentityMatrix::new(rows);
                    let given = Grid::from_rows(values)?;
                    if given != *identity.as_grid() {
                        return Err(MatrixError::invalid(
                            "identity",
                            "values are not the identity",
                        )
                        .into());
                    }
                    identity.into_square().into_grid()
                }
            };
            return Ok(grid);
        }

        if self.kind.is_square() && rows != cols {
            return Err(ConfigError::NotSquare {
                kind: self.kind,
                rows,
                cols,
            });
        }
        let grid = match self.kind {
            MatrixKind::General => Grid::filled(rows, cols, self.default),
            MatrixKind::Square => SquareMatrix::try_from(Grid::filled(rows, rows, self.default))?
                .into_grid(),
            MatrixKind::Symmetric => {
                SymmetricMatrix::from_rows(vec![vec![self.default; rows]; rows])?
                    .into_square()
                    .into_grid()
            }
            MatrixKind::Diagonal => {
                DiagonalMatrix::from_diagonal(&OneDimensionalMatrix::from_elem(rows, self.default))
                    .into_square()
                    .into_grid()
            }
            MatrixKind::Identity => IdentityMatrix::new(rows).into_square().into_grid(),
        };
        Ok(grid)
    }
}
