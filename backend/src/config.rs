use crate::services::trends_service::TrendsClient;
use crate::services::youtube_service::YouTubeClient;
use crate::AppState;
use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::info;
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::time::Duration;

const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_TRENDS_BASE_URL: &str = "https://trends.google.com";

/// Region/locale/timezone the daily trends are requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendsRegion {
    pub geo: String,
    pub hl: String,
    pub tz: i32,
}

impl Default for TrendsRegion {
    fn default() -> Self {
        Self {
            geo: "US".to_string(),
            hl: "en-US".to_string(),
            tz: -420,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub youtube_api_key: String,
    pub youtube_api_base_url: String,
    pub trends_base_url: String,
    pub trends_region: TrendsRegion,
    pub http_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let youtube_api_key = env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("YOUTUBE_API_KEY environment variable must be set")?;

        let region_defaults = TrendsRegion::default();
        let trends_region = TrendsRegion {
            geo: env::var("TRENDS_GEO").unwrap_or(region_defaults.geo),
            hl: env::var("TRENDS_HL").unwrap_or(region_defaults.hl),
            tz: env::var("TRENDS_TZ")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(region_defaults.tz),
        };

        Ok(Self {
            youtube_api_key,
            youtube_api_base_url: env::var("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_BASE_URL.to_string()),
            trends_base_url: env::var("TRENDS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TRENDS_BASE_URL.to_string()),
            trends_region,
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|secs| secs.parse().ok())
                    .unwrap_or(30),
            ),
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(5000),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Starting competitor analysis backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_app_state(config: &AppConfig) -> Result<AppState> {
    let youtube = YouTubeClient::new(
        &config.youtube_api_base_url,
        &config.youtube_api_key,
        config.http_timeout,
    )?;
    let trends = TrendsClient::new(
        &config.trends_base_url,
        config.trends_region.clone(),
        config.http_timeout,
    )?;
    info!(
        "Using YouTube API at {} and trends at {}",
        config.youtube_api_base_url, config.trends_base_url
    );

    Ok(AppState { youtube, trends })
}

pub fn create_cors(origins: &[String]) -> Result<rocket_cors::Cors> {
    let allowed_origins = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowedOrigins::all()
    } else {
        AllowedOrigins::some_exact(origins)
    };

    let cors = CorsOptions::default()
        .allowed_origins(allowed_origins)
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&[
            "Authorization",
            "Accept",
            "Content-Type",
        ]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
