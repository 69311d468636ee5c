use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

use crate::salary::predict_rub_salary;
use crate::stats::{summarize, LanguageReport};
use crate::POPULAR_LANGUAGES;

use super::types::{SearchPage, Vacancy};
use super::{Error, Result};

const VACANCIES_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
/// Moscow in the SuperJob town directory.
const TOWN_ID: u32 = 4;
const API_KEY_HEADER: &str = "X-Api-App-Id";

pub struct SuperJobClient {
    client: Client,
    base_url: String,
}

impl SuperJobClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, VACANCIES_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key).unwrap());
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        let client = Client::builder().default_headers(headers).build().unwrap();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches result pages for one keyword until the response stops
    /// reporting `more`.
    async fn search_all_pages(&self, language: &str) -> Result<(Vec<Vacancy>, u64)> {
        let mut vacancies = Vec::new();
        let mut total = 0;
        let mut page_number = 0u32;
        loop {
            log::debug!(
                "requesting vacancies from superjob, keyword: {}, page: {}",
                language,
                page_number
            );
            let resp = self
                .client
                .get(&self.base_url)
                .query(&[
                    ("town", TOWN_ID.to_string()),
                    ("keyword", language.to_owned()),
                    ("page", page_number.to_string()),
                ])
                .send()
                .await?;
            if !resp.status().is_success() {
                let status = resp.status();
                let error_body = resp.text().await;
                log::error!(
                    "superjob request failed, keyword: {}, page: {}, error resp body: {:?}",
                    language,
                    page_number,
                    error_body
                );
                return Err(Error::RequestNotOk(self.base_url.clone(), status));
            }
            let body = resp.text().await?;
            let page: SearchPage = serde_json::from_str(&body)?;
            total = page.total;
            vacancies.extend(page.objects);
            page_number += 1;
            if !page.more {
                break;
            }
        }
        Ok((vacancies, total))
    }
}

/// Runs the SuperJob pipeline for the whole language catalog, one report
/// row per language in catalog order.
pub async fn collect_reports(client: &SuperJobClient) -> Result<Vec<LanguageReport>> {
    let mut reports = Vec::with_capacity(POPULAR_LANGUAGES.len());
    for language in POPULAR_LANGUAGES {
        let (vacancies, total) = client.search_all_pages(language).await?;
        let salaries = vacancies
            .iter()
            .filter_map(|vacancy| {
                predict_rub_salary(
                    vacancy.currency.as_deref(),
                    vacancy.payment_to,
                    vacancy.payment_from,
                )
            })
            .collect::<Vec<_>>();
        log::info!(
            "superjob: {} vacancies found for {}, {} with a usable salary",
            total,
            language,
            salaries.len()
        );
        reports.push(summarize(language, total, &salaries));
    }
    Ok(reports)
}
