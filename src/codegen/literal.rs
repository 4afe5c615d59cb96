/// Render a number as a C `float` literal.
///
/// Whole numbers get `.0f` (`10.0f`), everything else a bare `f` suffix
/// (`20.5f`). Negative zero prints as `0.0f`.
pub fn float_literal(n: f64) -> String {
    // -0.0 == 0.0, so this also folds negative zero.
    let n = if n == 0.0 { 0.0 } else { n };

    if n.fract() == 0.0 {
        format!("{}.0f", n)
    } else {
        format!("{}f", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_get_point_zero() {
        assert_eq!(float_literal(10.0), "10.0f");
        assert_eq!(float_literal(0.0), "0.0f");
        assert_eq!(float_literal(-3.0), "-3.0f");
        assert_eq!(float_literal(1920.0), "1920.0f");
    }

    #[test]
    fn fractions_keep_shortest_form() {
        assert_eq!(float_literal(20.5), "20.5f");
        assert_eq!(float_literal(0.1), "0.1f");
        assert_eq!(float_literal(-12.25), "-12.25f");
    }

    #[test]
    fn negative_zero_is_folded() {
        assert_eq!(float_literal(-0.0), "0.0f");
    }
}
