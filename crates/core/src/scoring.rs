//! Scoring module - cascading line-clear points
//!
//! Rows cleared by one lock are scored in order: the k-th row of the pass is
//! worth `LINE_CLEAR_STEP * k`. One row pays 100, four rows pay
//! 100 + 200 + 300 + 400 = 1000.

/// Points for the first row of a pass; each further row adds one more step
pub const LINE_CLEAR_STEP: u32 = 100;

/// Points for clearing `rows` rows in one pass
pub fn line_clear_points(rows: usize) -> u32 {
    (1..=rows as u32).fold(0u32, |total, k| {
        total.saturating_add(LINE_CLEAR_STEP.saturating_mul(k))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 100);
        assert_eq!(line_clear_points(2), 300);
        assert_eq!(line_clear_points(3), 600);
        assert_eq!(line_clear_points(4), 1000);
    }

    #[test]
    fn test_points_grow_faster_than_flat() {
        for rows in 2..=8 {
            assert!(line_clear_points(rows) > rows as u32 * LINE_CLEAR_STEP);
        }
    }
}
