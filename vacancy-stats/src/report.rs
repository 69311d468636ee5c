use prettytable::{row, Table};

use crate::stats::LanguageReport;

/// Builds the four-column report table, one row per language in input order.
pub fn build_table(reports: &[LanguageReport]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "Язык программирования",
        "Вакансий найдено",
        "Вакансий обработано",
        "Средняя зарплата"
    ]);
    for report in reports {
        table.add_row(row![
            report.language,
            report.vacancies_found,
            report.vacancies_processed,
            report.average_salary
        ]);
    }
    table
}

/// Renders a report table under the given title.
pub fn render(title: &str, reports: &[LanguageReport]) -> String {
    format!("{}\n{}", title, build_table(reports))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stats::summarize;

    #[test]
    fn test_title_and_headers() {
        let rendered = render("hh vacancies moscow", &[]);
        assert!(rendered.starts_with("hh vacancies moscow\n"));
        for header in [
            "Язык программирования",
            "Вакансий найдено",
            "Вакансий обработано",
            "Средняя зарплата",
        ] {
            assert!(rendered.contains(header), "missing header: {}", header);
        }
    }

    #[test]
    fn test_rows_keep_input_order() {
        let reports = vec![
            summarize("Python", 10, &[100_000.0]),
            summarize("Ruby", 5, &[]),
            summarize("1C", 2, &[50_000.0]),
        ];
        let rendered = render("salaries", &reports);
        let python_at = rendered.find("Python").unwrap();
        let ruby_at = rendered.find("Ruby").unwrap();
        let onec_at = rendered.find("1C").unwrap();
        assert!(python_at < ruby_at);
        assert!(ruby_at < onec_at);
    }

    #[test]
    fn test_row_cells_come_from_the_report() {
        let rendered = render("salaries", &[summarize("Python", 42, &[90_000.0])]);
        assert!(rendered.contains("42"));
        assert!(rendered.contains("90000"));
    }
}
