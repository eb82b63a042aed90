//! Revenue path through an estimated demand matrix.
//!
//! The final solution carries a demand matrix estimated by machine
//! learning, giving the expected demand for any day-x and price. This
//! module finds the path through such a matrix that maximizes the
//! revenue collected along it: starting at the top-left cell and ending
//! at the bottom-right one, moving only right or down, visiting each
//! cell at most once.

/// Error returned for a demand matrix no path can be drawn through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemandGridError {
    /// The matrix has no rows or no columns
    #[error("demand grid must not be empty")]
    Empty,

    /// Rows have differing lengths
    #[error("demand grid rows must all have the same length")]
    Ragged,
}

/// Finds the maximal-revenue right/down path through a demand grid.
///
/// Returns the best total and the cells of the path, from `(0, 0)` to
/// `(rows - 1, cols - 1)`. When moving up or left collects the same
/// total during reconstruction, up wins.
///
/// # Errors
///
/// Returns `Err` if the grid is empty or ragged.
///
/// # Examples
///
/// ```
/// use bookings_report::pricing::max_revenue_path;
///
/// let grid = vec![vec![1, 1, 8], vec![3, 2, 1]];
/// let (total, path) = max_revenue_path(&grid).unwrap();
/// assert_eq!(total, 11);
/// assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (1, 2)]);
/// ```
pub fn max_revenue_path(grid: &[Vec<u64>]) -> Result<(u64, Vec<(usize, usize)>), DemandGridError> {
    let rows = grid.len();
    if rows == 0 || grid[0].is_empty() {
        return Err(DemandGridError::Empty);
    }
    let cols = grid[0].len();
    if grid.iter().any(|row| row.len() != cols) {
        return Err(DemandGridError::Ragged);
    }

    // Forward pass: best[r][c] is the maximal revenue collectable on a
    // right/down path from (0, 0) to (r, c).
    let mut best = vec![vec![0u64; cols]; rows];
    best[0][0] = grid[0][0];
    for row in 0..rows {
        for col in 0..cols {
            if row == 0 && col == 0 {
                continue;
            }
            let from_above = (row > 0).then(|| best[row - 1][col]);
            let from_left = (col > 0).then(|| best[row][col - 1]);
            let incoming = from_above.max(from_left).unwrap_or(0);
            best[row][col] = grid[row][col] + incoming;
        }
    }

    Ok((best[rows - 1][cols - 1], walk_back(&best)))
}

/// Reconstructs the path by walking the DP table backwards from the
/// bottom-right corner, preferring up over left on ties.
fn walk_back(best: &[Vec<u64>]) -> Vec<(usize, usize)> {
    let mut row = best.len() - 1;
    let mut col = best[0].len() - 1;
    let mut path = Vec::with_capacity(row + col + 1);

    loop {
        path.push((row, col));
        if row > 0 && (col == 0 || best[row - 1][col] >= best[row][col - 1]) {
            row -= 1;
        } else if col > 0 {
            col -= 1;
        } else {
            break;
        }
    }

    path.reverse();
    path
}
