use crate::error::{SplineError, SplineResult};

/// Pivots smaller than this are treated as zero during elimination.
const ZERO_PIVOT_TOLERANCE: f64 = 1e-16;

/// Solves a tridiagonal system with the Thomas algorithm in O(n).
///
/// Row `i` holds `lower[i]` on the subdiagonal, `diag[i]` on the main diagonal
/// and `upper[i]` on the superdiagonal. `lower[0]` and the last `upper` entry
/// are ignored. All four slices must have the same length.
///
/// # Errors
/// Returns [SplineError::SingularSystem] when a pivot vanishes during
/// elimination.
pub fn solve(lower: &[f64], diag: &[f64], upper: &[f64], rhs: &[f64]) -> SplineResult<Vec<f64>> {
    let size = diag.len();
    debug_assert!(size > 0);
    debug_assert!(lower.len() == size && upper.len() == size && rhs.len() == size);

    let mut modified_upper = vec![0.0; size];
    let mut modified_rhs = vec![0.0; size];

    let mut pivot = diag[0];
    if pivot.abs() < ZERO_PIVOT_TOLERANCE {
        return Err(SplineError::SingularSystem { row: 0 });
    }
    modified_upper[0] = upper[0] / pivot;
    modified_rhs[0] = rhs[0] / pivot;

    for i in 1..size {
        pivot = diag[i] - lower[i] * modified_upper[i - 1];
        if pivot.abs() < ZERO_PIVOT_TOLERANCE {
            return Err(SplineError::SingularSystem { row: i });
        }
        modified_upper[i] = upper[i] / pivot;
        modified_rhs[i] = (rhs[i] - lower[i] * modified_rhs[i - 1]) / pivot;
    }

    let mut solution = modified_rhs;
    for i in (0..size - 1).rev() {
        solution[i] -= modified_upper[i] * solution[i + 1];
    }
    Ok(solution)
}
