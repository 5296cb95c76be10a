use crate::models::{
    ChannelProfile, VideoSummary, MISSING_COUNT, MISSING_DESCRIPTION, MISSING_TITLE,
};
use anyhow::{Context, Result};
use log::{error, info};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const LATEST_VIDEO_LIMIT: usize = 10;

/// Read-only access to the YouTube Data API v3.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build YouTube HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn get_json(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        // Documentation: https://developers.google.com/youtube/v3/docs
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Request to YouTube {endpoint} failed"))?
            .error_for_status()
            .with_context(|| format!("YouTube {endpoint} returned an error status"))?;

        response
            .json::<Value>()
            .await
            .with_context(|| format!("Invalid JSON from YouTube {endpoint}"))
    }

    /// First channel search hit for `channel_name` plus its subscriber count.
    /// `Ok(None)` when the search has no channel results.
    pub async fn search_channel(&self, channel_name: &str) -> Result<Option<ChannelProfile>> {
        info!("Searching for channel: {channel_name}");
        let search = self
            .get_json(
                "search",
                &[
                    ("q", channel_name),
                    ("type", "channel"),
                    ("part", "snippet"),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        let first = match search["items"].as_array().and_then(|items| items.first()) {
            Some(item) => item,
            None => return Ok(None),
        };

        let channel_id = first["id"]["channelId"]
            .as_str()
            .context("Channel search hit without a channel ID")?
            .to_string();
        let title = first["snippet"]["title"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        let stats = self
            .get_json("channels", &[("id", channel_id.as_str()), ("part", "statistics")])
            .await?;
        let subscriber_count =
            non_empty_str(&stats["items"][0]["statistics"]["subscriberCount"], "0").to_string();

        Ok(Some(ChannelProfile {
            channel_id,
            title,
            subscriber_count,
        }))
    }

    /// Details of the channel's most recent uploads, newest first.
    pub async fn latest_videos(&self, channel_id: &str) -> Result<Vec<VideoSummary>> {
        info!("Fetching latest {LATEST_VIDEO_LIMIT} videos for channel ID: {channel_id}");
        let limit = LATEST_VIDEO_LIMIT.to_string();
        let search = self
            .get_json(
                "search",
                &[
                    ("channelId", channel_id),
                    ("part", "snippet"),
                    ("maxResults", limit.as_str()),
                    ("order", "date"),
                    ("type", "video"),
                ],
            )
            .await?;

        let video_ids: Vec<&str> = search["items"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item["id"]["videoId"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = video_ids.join(",");
        let details = self
            .get_json("videos", &[("id", ids.as_str()), ("part", "snippet,statistics")])
            .await?;

        Ok(details["items"]
            .as_array()
            .map(|items| items.iter().map(video_summary).collect())
            .unwrap_or_default())
    }
}

fn non_empty_str<'a>(value: &'a Value, default: &'a str) -> &'a str {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

fn video_summary(item: &Value) -> VideoSummary {
    let snippet = &item["snippet"];
    let statistics = &item["statistics"];

    VideoSummary {
        video_id: item["id"].as_str().unwrap_or_default().to_string(),
        title: non_empty_str(&snippet["title"], MISSING_TITLE).to_string(),
        description: non_empty_str(&snippet["description"], MISSING_DESCRIPTION).to_string(),
        tags: snippet["tags"]
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default(),
        views: non_empty_str(&statistics["viewCount"], MISSING_COUNT).to_string(),
        likes: non_empty_str(&statistics["likeCount"], MISSING_COUNT).to_string(),
        comments: non_empty_str(&statistics["commentCount"], MISSING_COUNT).to_string(),
    }
}

/// Channel lookup with upstream failures logged and reported as "not found".
pub async fn get_channel_data(
    youtube: &YouTubeClient,
    channel_name: &str,
) -> Option<ChannelProfile> {
    match youtube.search_channel(channel_name).await {
        Ok(Some(channel)) => Some(channel),
        Ok(None) => {
            error!("No channel found for: {channel_name}");
            None
        }
        Err(e) => {
            error!("Error fetching channel data: {e:?}");
            None
        }
    }
}

/// Latest videos with upstream failures logged and degraded to an empty list.
pub async fn get_latest_videos(youtube: &YouTubeClient, channel_id: &str) -> Vec<VideoSummary> {
    match youtube.latest_videos(channel_id).await {
        Ok(videos) => {
            info!("Fetched {} videos for channel ID: {channel_id}", videos.len());
            videos
        }
        Err(e) => {
            error!("Error fetching latest videos: {e:?}");
            Vec::new()
        }
    }
}
