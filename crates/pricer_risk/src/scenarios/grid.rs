//! Evenly spaced value grids.

use num_traits::Float;

/// Returns `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// `n == 0` yields an empty vector and `n == 1` yields `[start]`. The last
/// element is exactly `end`.
///
/// # Examples
/// ```
/// use pricer_risk::scenarios::linspace;
///
/// assert_eq!(linspace(0.0_f64, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = n - 1;
            let steps = T::from(last).unwrap_or_else(T::nan);
            let step = (end - start) / steps;
            (0..n)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        start + step * T::from(i).unwrap_or_else(T::nan)
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_inclusive() {
        let grid = linspace(0.01_f64, 1000.0, 100);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 0.01);
        assert_eq!(grid[99], 1000.0);
    }

    #[test]
    fn test_even_spacing() {
        let grid = linspace(50.0_f64, 150.0, 101);
        for pair in grid.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_degenerate_counts() {
        assert!(linspace(0.0_f64, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0_f64, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn test_descending_range() {
        let grid = linspace(1.0_f64, 0.0, 3);
        assert_eq!(grid, vec![1.0, 0.5, 0.0]);
    }
}
