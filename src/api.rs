// API client module: a small blocking HTTP client that asks the graph API
// for the shares of one post at a time. Requests are sequential; there is no
// pagination, retry or explicit timeout.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::FetchError;

/// Fields requested for every share entry.
pub const SHARE_FIELDS: &str = "id,from{name,id},created_time";

/// Single page size. Posts with more shares than this are under-reported.
pub const PAGE_LIMIT: u32 = 100;

/// Body of a successful `/{post_id}/sharedposts` call. Everything is
/// optional because the API omits fields it can't return.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RawResponse {
    #[serde(default)]
    pub data: Option<Vec<RawShare>>,
}

/// One share entry as returned by the API. The share's own `id` is
/// requested but not kept.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RawShare {
    #[serde(default)]
    pub from: Option<RawActor>,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// The account that shared the post.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RawActor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Anything that can produce the raw shares of a post. The session only
/// depends on this, so it can run against a stub in tests.
pub trait ShareSource {
    fn fetch_shares(&self, post_id: &str) -> Result<RawResponse, FetchError>;
}

/// Client for the graph API: holds a reqwest blocking client, the versioned
/// base URL and the access token.
#[derive(Clone)]
pub struct ShareFetcher {
    client: Client,
    base_url: String,
    access_token: String,
}

impl ShareFetcher {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(ShareFetcher {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn shares_url(&self, post_id: &str) -> String {
        format!("{}/{}/sharedposts", self.base_url, post_id)
    }
}

impl ShareSource for ShareFetcher {
    /// GET `{base}/{post_id}/sharedposts`. Only HTTP 200 counts as success;
    /// any other status carries the error body the API sent back.
    fn fetch_shares(&self, post_id: &str) -> Result<RawResponse, FetchError> {
        let url = self.shares_url(post_id);
        debug!(%url, post_id, "requesting shared posts");

        let limit = PAGE_LIMIT.to_string();
        let res = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("fields", SHARE_FIELDS),
                ("limit", limit.as_str()),
            ])
            .send()?;

        let status = res.status();
        let text = res.text()?;

        if status != StatusCode::OK {
            // Error bodies are normally JSON; keep plain text if they aren't.
            let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
            warn!(post_id, status = status.as_u16(), %body, "share request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RawResponse = serde_json::from_str(&text)?;
        info!(
            post_id,
            entries = parsed.data.as_ref().map_or(0, Vec::len),
            "received shares"
        );
        Ok(parsed)
    }
}
