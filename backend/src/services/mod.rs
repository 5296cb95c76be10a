pub mod analysis_service;
pub mod trends_service;
pub mod youtube_service;
