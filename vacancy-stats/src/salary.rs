/// Predicted monthly salary in rubles for a single vacancy posting.
///
/// Postings that state only a floor tend to pay above it, postings that
/// state only a ceiling tend to pay below it.
pub fn predict_rub_salary(
    currency: Option<&str>,
    payment_to: Option<f64>,
    payment_from: Option<f64>,
) -> Option<f64> {
    if !matches!(currency, Some("rub") | Some("RUR")) {
        return None;
    }
    // SuperJob reports an unset bound as a literal 0, not null.
    let payment_from = payment_from.filter(|bound| *bound != 0.0);
    let payment_to = payment_to.filter(|bound| *bound != 0.0);
    match (payment_from, payment_to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ignores_foreign_currencies() {
        assert_eq!(
            predict_rub_salary(Some("USD"), Some(5000.0), Some(3000.0)),
            None
        );
        assert_eq!(predict_rub_salary(Some("EUR"), None, Some(3000.0)), None);
        assert_eq!(
            predict_rub_salary(None, Some(5000.0), Some(3000.0)),
            None
        );
    }

    #[test]
    fn test_both_bounds_give_the_mean() {
        assert_eq!(
            predict_rub_salary(Some("RUR"), Some(100_000.0), Some(80_000.0)),
            Some(90_000.0)
        );
    }

    #[test]
    fn test_lower_bound_only() {
        assert_eq!(
            predict_rub_salary(Some("rub"), None, Some(50_000.0)),
            Some(60_000.0)
        );
    }

    #[test]
    fn test_upper_bound_only() {
        assert_eq!(
            predict_rub_salary(Some("RUR"), Some(40_000.0), None),
            Some(32_000.0)
        );
    }

    #[test]
    fn test_no_bounds() {
        assert_eq!(predict_rub_salary(Some("RUR"), None, None), None);
        assert_eq!(predict_rub_salary(Some("rub"), None, None), None);
    }

    #[test]
    fn test_zero_bound_treated_as_absent() {
        assert_eq!(
            predict_rub_salary(Some("rub"), Some(0.0), Some(50_000.0)),
            Some(60_000.0)
        );
        assert_eq!(predict_rub_salary(Some("rub"), Some(0.0), Some(0.0)), None);
    }
}
