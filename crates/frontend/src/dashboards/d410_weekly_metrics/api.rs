use contracts::dashboards::d410_weekly_metrics::{normalize_records, RawRecord, WeeklyPoint};
use gloo_net::http::Request;

/// Static fixture served next to the application
pub const FIXTURE_URL: &str = "/fixtures/fixtures.json";

/// Получить сырые записи фикстуры
pub async fn fetch_raw_records() -> Result<Vec<RawRecord>, String> {
    let response = Request::get(FIXTURE_URL)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<RawRecord> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Загрузить фикстуру и свести её к одной точке на неделю
pub async fn load_weekly_points() -> Result<Vec<WeeklyPoint>, String> {
    let records = fetch_raw_records().await?;
    let points = normalize_records(&records);
    log::debug!(
        "D410: {} raw records normalized to {} weekly points",
        records.len(),
        points.len()
    );
    Ok(points)
}
