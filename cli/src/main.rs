use dotenv::dotenv;
use vacancy_stats::hh::{self, HhClient};
use vacancy_stats::report;
use vacancy_stats::superjob::{self, SuperJobClient};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let sj_token = std::env::var("SJ_TOKEN").expect("SJ_TOKEN not set");

    let hh_client = HhClient::new();
    let hh_reports = hh::collect_reports(&hh_client)
        .await
        .expect("Failed to collect hh vacancies");

    let sj_client = SuperJobClient::new(&sj_token);
    let sj_reports = superjob::collect_reports(&sj_client)
        .await
        .expect("Failed to collect superjob vacancies");

    println!("{}", report::render("hh vacancies moscow", &hh_reports));
    println!("{}", report::render("super job vacancies moscow", &sj_reports));
}
