use crate::config::TrendsRegion;
use anyhow::{Context, Result};
use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyTrendsPayload {
    default: DailyTrends,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyTrends {
    trending_searches_days: Vec<TrendingDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrendingDay {
    trending_searches: Vec<TrendingSearch>,
}

#[derive(Debug, Deserialize)]
struct TrendingSearch {
    title: TrendingTitle,
}

#[derive(Debug, Deserialize)]
struct TrendingTitle {
    query: String,
}

/// Parses a daily-trends body. The endpoint prefixes its JSON with a guard
/// line (`)]}',`), so everything before the first `{` is skipped.
pub fn parse_daily_trends(body: &str) -> Result<Vec<String>> {
    let start = body
        .find('{')
        .context("Daily trends response contains no JSON object")?;
    let payload: DailyTrendsPayload =
        serde_json::from_str(&body[start..]).context("Malformed daily trends JSON")?;

    let today = payload
        .default
        .trending_searches_days
        .into_iter()
        .next()
        .context("Daily trends response has no days")?;

    Ok(today
        .trending_searches
        .into_iter()
        .map(|search| search.title.query)
        .collect())
}

#[derive(Debug, Clone)]
pub struct TrendsClient {
    client: Client,
    base_url: String,
    region: TrendsRegion,
}

impl TrendsClient {
    pub fn new(base_url: &str, region: TrendsRegion, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build trends HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            region,
        })
    }

    pub async fn daily_trends(&self) -> Result<Vec<String>> {
        let url = format!("{}/trends/api/dailytrends", self.base_url);
        let tz = self.region.tz.to_string();
        let body = self
            .client
            .get(&url)
            .query(&[
                ("hl", self.region.hl.as_str()),
                ("tz", tz.as_str()),
                ("geo", self.region.geo.as_str()),
                ("ns", "15"),
            ])
            .send()
            .await
            .context("Request to daily trends failed")?
            .error_for_status()
            .context("Daily trends returned an error status")?
            .text()
            .await
            .context("Failed to read daily trends body")?;

        parse_daily_trends(&body)
    }
}

/// Best-effort trending queries; any failure yields an empty list.
pub async fn fetch_trending_keywords(trends: &TrendsClient) -> Vec<String> {
    match trends.daily_trends().await {
        Ok(queries) => {
            info!("Fetched {} trending searches", queries.len());
            queries
        }
        Err(e) => {
            warn!("Error fetching daily trends: {e:?}");
            Vec::new()
        }
    }
}
