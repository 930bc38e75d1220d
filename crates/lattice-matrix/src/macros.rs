//! Forwarding of the grid's mutators onto the wrapper types.
//!
//! The wrappers only deref immutably; handing out `&mut Grid` would let a
//! caller assign a new grid over the wrapped one, dropping its policy or shape.

/// Expands to the policy-checked mutators of [`Grid`](crate::Grid), delegating
/// to `self.$inner`. Use inside an `impl` block bounded by `T: Copy + Num`.
macro_rules! forward_grid_mutators {
    ($inner:tt) => {
        pub fn set(&mut self, row: usize, col: usize, value: T) -> $crate::error::Result<()> {
            self.$inner.set(row, col, value)
        }

        pub fn set_row(
            &mut self,
            row: usize,
            values: &$crate::vector::OneDimensionalMatrix<T>,
        ) -> $crate::error::Result<()> {
            self.$inner.set_row(row, values)
        }

        pub fn set_col(
            &mut self,
            col: usize,
            values: &$crate::vector::OneDimensionalMatrix<T>,
        ) -> $crate::error::Result<()> {
            self.$inner.set_col(col, values)
        }

        pub fn swap_rows(&mut self, first: usize, second: usize) -> $crate::error::Result<()> {
            self.$inner.swap_rows(first, second)
        }

        pub fn swap_cols(&mut self, first: usize, second: usize) -> $crate::error::Result<()> {
            self.$inner.swap_cols(first, second)
        }

        pub fn add_scalar(&mut self, value: T) -> $crate::error::Result<()> {
            self.$inner.add_scalar(value)
        }

        pub fn subtract_scalar(&mut self, value: T) -> $crate::error::Result<()> {
            self.$inner.subtract_scalar(value)
        }

        pub fn multiply_scalar(&mut self, value: T) -> $crate::error::Result<()> {
            self.$inner.multiply_scalar(value)
        }
    };
}
