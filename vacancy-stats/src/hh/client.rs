use reqwest::Client;

use crate::salary::predict_rub_salary;
use crate::stats::{summarize, LanguageReport};
use crate::POPULAR_LANGUAGES;

use super::types::{SearchPage, Vacancy};
use super::{Error, Result};

const VACANCIES_URL: &str = "https://api.hh.ru/vacancies";
/// Moscow in the hh area directory.
const AREA_ID: u32 = 1;
/// Trailing search window in days.
const SEARCH_PERIOD_DAYS: u32 = 30;

pub struct HhClient {
    client: Client,
    base_url: String,
}

impl HhClient {
    pub fn new() -> Self {
        Self::with_base_url(VACANCIES_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches every result page for one language, following the page
    /// count reported by the most recent response.
    async fn search_all_pages(&self, language: &str) -> Result<(Vec<Vacancy>, u64)> {
        let text = format!("Программист {}", language);
        let mut vacancies = Vec::new();
        let mut found = 0;
        let mut page_number = 0u32;
        let mut pages = 1u32;
        while page_number < pages {
            log::debug!(
                "requesting vacancies from hh, language: {}, page: {}",
                language,
                page_number
            );
            let resp = self
                .client
                .get(&self.base_url)
                .query(&[
                    ("text", text.clone()),
                    ("area", AREA_ID.to_string()),
                    ("period", SEARCH_PERIOD_DAYS.to_string()),
                    ("page", page_number.to_string()),
                ])
                .send()
                .await?;
            if !resp.status().is_success() {
                let status = resp.status();
                let error_body = resp.text().await;
                log::error!(
                    "hh request failed, language: {}, page: {}, error resp body: {:?}",
                    language,
                    page_number,
                    error_body
                );
                return Err(Error::RequestNotOk(self.base_url.clone(), status));
            }
            let body = resp.text().await?;
            let page: SearchPage = serde_json::from_str(&body)?;
            pages = page.pages;
            found = page.found;
            vacancies.extend(page.items);
            page_number += 1;
        }
        Ok((vacancies, found))
    }
}

/// Runs the hh pipeline for the whole language catalog, one report row
/// per language in catalog order.
pub async fn collect_reports(client: &HhClient) -> Result<Vec<LanguageReport>> {
    let mut reports = Vec::with_capacity(POPULAR_LANGUAGES.len());
    for language in POPULAR_LANGUAGES {
        let (vacancies, found) = client.search_all_pages(language).await?;
        let salaries = vacancies
            .iter()
            // Vacancies with no salary object at all are skipped, they
            // don't count as processed.
            .filter_map(|vacancy| vacancy.salary.as_ref())
            .filter_map(|salary| {
                predict_rub_salary(salary.currency.as_deref(), salary.to, salary.from)
            })
            .collect::<Vec<_>>();
        log::info!(
            "hh: {} vacancies found for {}, {} with a usable salary",
            found,
            language,
            salaries.len()
        );
        reports.push(summarize(language, found, &salaries));
    }
    Ok(reports)
}
