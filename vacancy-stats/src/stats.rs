/// One report row: salary statistics for a single language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageReport {
    pub language: String,
    pub vacancies_found: u64,
    pub vacancies_processed: usize,
    pub average_salary: u64,
}

/// Folds the predicted salaries for one language into a report row.
///
/// `vacancies_found` is the provider's total match count for the query,
/// `salaries` only the vacancies that produced a usable estimate.
pub fn summarize(language: &str, vacancies_found: u64, salaries: &[f64]) -> LanguageReport {
    let vacancies_processed = salaries.len();
    let average_salary = if vacancies_processed > 0 {
        (salaries.iter().sum::<f64>() / vacancies_processed as f64) as u64
    } else {
        0
    };
    LanguageReport {
        language: language.to_owned(),
        vacancies_found,
        vacancies_processed,
        average_salary,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_no_processed_vacancies() {
        let report = summarize("Ruby", 120, &[]);
        assert_eq!(report.vacancies_found, 120);
        assert_eq!(report.vacancies_processed, 0);
        assert_eq!(report.average_salary, 0);
    }

    #[test]
    fn test_average_is_integer_mean() {
        let report = summarize("Python", 3, &[90_000.0, 110_000.0, 100_000.0]);
        assert_eq!(report.vacancies_processed, 3);
        assert_eq!(report.average_salary, 100_000);
    }

    #[test]
    fn test_fractional_mean_is_truncated() {
        let report = summarize("PHP", 2, &[100.0, 101.0]);
        assert_eq!(report.average_salary, 100);
    }
}
