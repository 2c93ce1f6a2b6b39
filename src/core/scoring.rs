//! Scoring engine: classic line-clear scoring, level progression, and the
//! level-keyed drop interval.

use crate::types::{
    BASE_DROP_MS, DROP_SPEED_FLOOR_MS, DROP_SPEED_STEP_MS, HARD_DROP_BONUS_PER_ROW,
    LINES_PER_LEVEL, LINE_SCORES, PLACING_BONUS,
};

/// Add the line-clear award to the running score:
/// `base[lines] * (level + 1)` with base `[0, 40, 100, 300, 1200]`.
///
/// `lines` beyond 4 scores nothing; a single lock cannot clear more on a
/// standard board.
pub fn calculate_score(current_score: u32, lines_cleared: u32, level: u32) -> u32 {
    let base = LINE_SCORES
        .get(lines_cleared as usize)
        .copied()
        .unwrap_or(0);
    current_score + base * (level + 1)
}

/// Level from total lines cleared: one level per ten lines.
pub fn calculate_level(total_lines_cleared: u32) -> u32 {
    total_lines_cleared / LINES_PER_LEVEL
}

/// Flat bonus on every piece lock, lines or not.
pub fn add_placing_score(current_score: u32) -> u32 {
    current_score + PLACING_BONUS
}

/// Bonus proportional to rows traversed during a hard drop.
pub fn add_hard_drop_score(current_score: u32, rows_dropped: u32) -> u32 {
    current_score + HARD_DROP_BONUS_PER_ROW * rows_dropped
}

/// Automatic-fall interval for a level, over the default base interval.
pub fn drop_speed_ms(level: u32) -> u32 {
    drop_speed_with_base_ms(BASE_DROP_MS, level)
}

/// Same speed curve over a configured base interval: linear speed-up,
/// clamped at the floor.
pub fn drop_speed_with_base_ms(base_ms: u32, level: u32) -> u32 {
    base_ms
        .saturating_sub(level.saturating_mul(DROP_SPEED_STEP_MS))
        .max(DROP_SPEED_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_score_zero_lines_is_identity() {
        assert_eq!(calculate_score(123, 0, 0), 123);
        assert_eq!(calculate_score(123, 0, 7), 123);
    }

    #[test]
    fn test_calculate_score_base_table() {
        assert_eq!(calculate_score(0, 1, 0), 40);
        assert_eq!(calculate_score(0, 2, 0), 100);
        assert_eq!(calculate_score(0, 3, 0), 300);
        assert_eq!(calculate_score(0, 4, 0), 1200);
    }

    #[test]
    fn test_calculate_score_level_multiplier() {
        assert_eq!(calculate_score(0, 1, 4), 40 * 5);
        assert_eq!(calculate_score(50, 4, 2), 50 + 1200 * 3);
    }

    #[test]
    fn test_calculate_level_boundaries() {
        assert_eq!(calculate_level(0), 0);
        assert_eq!(calculate_level(9), 0);
        assert_eq!(calculate_level(10), 1);
        assert_eq!(calculate_level(25), 2);
    }

    #[test]
    fn test_placing_and_hard_drop_bonuses() {
        assert_eq!(add_placing_score(0), 10);
        assert_eq!(add_placing_score(90), 100);
        assert_eq!(add_hard_drop_score(0, 18), 36);
        assert_eq!(add_hard_drop_score(100, 0), 100);
    }

    #[test]
    fn test_drop_speed_curve() {
        assert_eq!(drop_speed_ms(0), 1000);
        assert_eq!(drop_speed_ms(1), 950);
        assert_eq!(drop_speed_ms(19), 50);
        // Floor clamp, including levels past the linear range.
        assert_eq!(drop_speed_ms(25), 50);
        assert_eq!(drop_speed_ms(u32::MAX), 50);
    }

    #[test]
    fn test_drop_speed_with_custom_base() {
        assert_eq!(drop_speed_with_base_ms(600, 0), 600);
        assert_eq!(drop_speed_with_base_ms(600, 5), 350);
        assert_eq!(drop_speed_with_base_ms(600, 100), 50);
    }
}
