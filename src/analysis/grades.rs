//! Average, high and low over monthly difficulty grades.

/// Summary statistics for a run of grades.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradeSummary {
    pub average: f64,
    pub high: u32,
    pub low: u32,
}

/// An empty slice yields all zeros.
pub fn analyze_grades(grades: &[u32]) -> GradeSummary {
    let Some((&first, rest)) = grades.split_first() else {
        return GradeSummary::default();
    };

    let mut high = first;
    let mut low = first;
    let mut sum = u64::from(first);
    for &grade in rest {
        high = high.max(grade);
        low = low.min(grade);
        sum += u64::from(grade);
    }

    GradeSummary {
        average: sum as f64 / grades.len() as f64,
        high,
        low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(
            analyze_grades(&[]),
            GradeSummary {
                average: 0.0,
                high: 0,
                low: 0
            }
        );
    }

    #[test]
    fn test_five_grades() {
        let summary = analyze_grades(&[3, 5, 7, 2, 10]);
        assert_eq!(summary.average, 5.4);
        assert_eq!(summary.high, 10);
        assert_eq!(summary.low, 2);
    }

    #[test]
    fn test_full_year() {
        let grades = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 1, 2];
        let summary = analyze_grades(&grades);
        assert_eq!(summary.high, 10);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.average, 58.0 / 12.0);
    }

    #[test]
    fn test_single_grade_seeds_high_and_low() {
        let summary = analyze_grades(&[7]);
        assert_eq!(summary.average, 7.0);
        assert_eq!(summary.high, 7);
        assert_eq!(summary.low, 7);
    }
}
