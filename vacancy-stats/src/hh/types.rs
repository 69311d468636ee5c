use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchPage {
    pub items: Vec<Vacancy>,
    pub pages: u32,
    pub found: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Vacancy {
    pub salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}
