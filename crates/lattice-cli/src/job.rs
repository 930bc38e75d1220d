//! Job files: one or two matrix operands and the operation to apply.
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use lattice_matrix::config::{MatrixConfig, MatrixKind};
use lattice_matrix::{Grid, SquareMatrix};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Transpose,
    Diagonal,
    Scale { factor: f64 },
    Shift { amount: f64 },
    Row { index: usize },
    Col { index: usize },
    SwapRows { first: usize, second: usize },
    SwapCols { first: usize, second: usize },
}

impl Operation {
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Subtract | Operation::Multiply
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub operation: Operation,
    pub left: MatrixConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<MatrixConfig>,
}

impl JobConfig {
    /// The job printed by `lattice template`.
    pub fn template() -> Self {
        Self {
            operation: Operation::Multiply,
            left: MatrixConfig::from_values(
                MatrixKind::General,
                vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            ),
            right: Some(MatrixConfig::from_values(
                MatrixKind::General,
                vec![vec![5.0, 6.0], vec![7.0, 8.0]],
            )),
        }
    }
}

/// Load a job from a JSON file.
pub fn load_job<P: AsRef<Path>>(path: P) -> Result<JobConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read job: {}", path.as_ref().display()))?;
    let job: JobConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse job: {}", path.as_ref().display()))?;
    Ok(job)
}

fn right_operand(job: &JobConfig) -> Result<Grid<f64>> {
    let Some(right) = &job.right else {
        bail!("operation {:?} needs a right operand", job.operation);
    };
    right.build().context("Failed to build right operand")
}

/// Build the operands and evaluate the job's operation.
pub fn run_job(job: &JobConfig) -> Result<Grid<f64>> {
    let mut left = job.left.build().context("Failed to build left operand")?;
    log::info!(
        "evaluating {:?} on a {}x{} {} matrix",
        job.operation,
        left.nrows(),
        left.ncols(),
        left.policy().name()
    );
    if !job.operation.is_binary() && job.right.is_some() {
        log::warn!("ignoring right operand for {:?}", job.operation);
    }

    let result = match &job.operation {
        Operation::Add => left.add_matrix(&right_operand(job)?)?,
        Operation::Subtract => left.subtract_matrix(&right_operand(job)?)?,
        Operation::Multiply => left.multiply_matrix(&right_operand(job)?)?,
        Operation::Transpose => {
            let mut square =
                SquareMatrix::try_from(left).context("transpose needs a square matrix")?;
            square.transpose();
            square.into_grid()
        }
        Operation::Diagonal => {
            let square = SquareMatrix::try_from(left).context("diagonal needs a square matrix")?;
            square.get_diagonal().into_grid()
        }
        Operation::Scale { factor } => {
            left.multiply_scalar(*factor)?;
            left
        }
        Operation::Shift { amount } => {
            left.add_scalar(*amount)?;
            left
        }
        Operation::Row { index } => left.get_row(*index)?.into_grid(),
        Operation::Col { index } => left.get_col(*index)?.into_grid(),
        Operation::SwapRows { first, second } => {
            left.swap_rows(*first, *second)?;
            left
        }
        Operation::SwapCols { first, second } => {
            left.swap_cols(*first, *second)?;
            left
        }
    };
    Ok(result)
}
