#[macro_use]
extern crate rocket;

mod analysis;
mod api;
mod config;
mod error;
mod models;
mod services;

use crate::config::{create_app_state, create_cors, init_logger, load_environment, AppConfig};
use crate::models::ErrorResponse;
use crate::services::trends_service::TrendsClient;
use crate::services::youtube_service::YouTubeClient;
use rocket::figment::Provider;
use rocket::serde::json::Json;
use rocket::{Build, Rocket};

pub struct AppState {
    pub youtube: YouTubeClient,
    pub trends: TrendsClient,
}

#[catch(404)]
fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "Not found.".to_string(),
    })
}

#[catch(422)]
fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "Unprocessable request.".to_string(),
    })
}

#[catch(500)]
fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "Failed to analyze competitor.".to_string(),
    })
}

pub fn build_rocket<P: Provider>(provider: P, state: AppState) -> Rocket<Build> {
    rocket::custom(provider)
        .manage(state)
        .mount("/", routes![api::analyze, api::list_videos])
        .register("/", catchers![not_found, unprocessable, internal_error])
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let app_config = AppConfig::from_env()?;
    let state = create_app_state(&app_config)?;
    let cors = create_cors(&app_config.cors_allowed_origins)?;
    let figment = rocket::Config::figment().merge(("port", app_config.port));

    build_rocket(figment, state)
        .attach(cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed to launch: {}", e))?;

    Ok(())
}
