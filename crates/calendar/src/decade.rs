//! Decade grouping.

/// Decade of a year: `floor(year / 10) * 10`.
///
/// Uses floored division, so years before 0 still map to the decade that
/// contains them (`-1` maps to `-10`).
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Display label of a decade, e.g. `"1950s"`.
pub fn decade_label(decade: i32) -> String {
    format!("{decade}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decade_of_years() {
        assert_eq!(decade_of(1950), 1950);
        assert_eq!(decade_of(1959), 1950);
        assert_eq!(decade_of(2021), 2020);
        assert_eq!(decade_of(0), 0);
        assert_eq!(decade_of(-1), -10);
    }

    #[test]
    fn label() {
        assert_eq!(decade_label(2010), "2010s");
    }
}
