//! Write policies distinguishing the specialised square matrices.
//!
//! A grid always stores a full rectangle of values. What differs between a
//! general, symmetric, diagonal or identity matrix is only what a write does:
//! the policy turns one requested write into the cell writes that actually
//! happen, or rejects it.
use num_traits::Num;

use crate::error::{MatrixError, Result};

/// A single effective cell write, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellWrite<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> CellWrite<T> {
    fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Writes land verbatim.
    #[default]
    Unconstrained,
    /// Writes are mirrored across the diagonal.
    Symmetric,
    /// Off-diagonal writes are forced to zero.
    Diagonal,
    /// Diagonal fixed at one, everything else fixed at zero.
    Identity,
}

impl WritePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            WritePolicy::Unconstrained => "general",
            WritePolicy::Symmetric => "symmetric",
            WritePolicy::Diagonal => "diagonal",
            WritePolicy::Identity => "identity",
        }
    }

    pub fn is_constrained(&self) -> bool {
        !matches!(self, WritePolicy::Unconstrained)
    }

    /// Map a requested write of `value` at `(row, col)` to the writes that take effect.
    ///
    /// Indices are assumed to be validated by the caller.
    pub fn plan<T>(&self, row: usize, col: usize, value: T) -> Result<Vec<CellWrite<T>>>
    where
        T: Copy + Num,
    {
        match self {
            WritePolicy::Unconstrained => Ok(vec![CellWrite::new(row, col, value)]),
            WritePolicy::Symmetric if row == col => Ok(vec![CellWrite::new(row, col, value)]),
            WritePolicy::Symmetric => Ok(vec![
                CellWrite::new(row, col, value),
                CellWrite::new(col, row, value),
            ]),
            WritePolicy::Diagonal if row == col => Ok(vec![CellWrite::new(row, col, value)]),
            WritePolicy::Diagonal => {
                if value != T::zero() {
                    log::warn!(
                        "off-diagonal write at ({}, {}) on a diagonal matrix forced to zero",
                        row,
                        col
                    );
                }
                Ok(vec![CellWrite::new(row, col, T::zero())])
            }
            WritePolicy::Identity => {
                let fixed = if row == col { T::one() } else { T::zero() };
                if value == fixed {
                    Ok(Vec::new())
                } else {
                    Err(MatrixError::invalid(
                        self.name(),
                        format!("entry ({}, {}) is fixed", row, col),
                    ))
                }
            }
        }
    }

    /// Row and column swaps cannot be expressed through mirrored or masked writes.
    pub(crate) fn check_swap(&self, first: usize, second: usize) -> Result<()> {
        if first != second && self.is_constrained() {
            return Err(MatrixError::invalid(
                self.name(),
                format!("cannot swap {} and {}", first, second),
            ));
        }
        Ok(())
    }

    /// Adding a constant fills the off-diagonal, which only a general or symmetric matrix allows.
    pub(crate) fn check_shift<T>(&self, value: T) -> Result<()>
    where
        T: Copy + Num,
    {
        match self {
            WritePolicy::Diagonal | WritePolicy::Identity if value != T::zero() => Err(
                MatrixError::invalid(self.name(), "scalar shift would fill the off-diagonal"),
            ),
            _ => Ok(()),
        }
    }

    pub(crate) fn check_scale<T>(&self, value: T) -> Result<()>
    where
        T: Copy + Num,
    {
        match self {
            WritePolicy::Identity if value != T::one() => Err(MatrixError::invalid(
                self.name(),
                "scaling would move the diagonal off one",
            )),
            _ => Ok(()),
        }
    }
}
