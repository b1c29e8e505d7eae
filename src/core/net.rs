// src/core/net.rs
//
// Blocking HTTP GET against the stats API. The API rejects requests that
// don't look like they come from nba.com, hence the browser-ish headers.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, ORIGIN, REFERER};

use crate::config::{Settings, consts};
use crate::error::{AppError, Result};
use super::table::StatsResponse;

/// Cheap to clone; the inner reqwest client shares its connection pool.
#[derive(Clone, Debug)]
pub struct StatsClient {
    http: Client,
    base: String,
    league_id: String,
}

fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(REFERER, HeaderValue::from_static(consts::REFERER));
    h.insert(ORIGIN, HeaderValue::from_static(consts::ORIGIN));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

impl StatsClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.http_timeout_seconds))
            .user_agent(consts::USER_AGENT)
            .default_headers(default_headers())
            .build()?;
        Ok(Self {
            http,
            base: settings.api_base.trim_end_matches('/').to_string(),
            league_id: settings.league_id.clone(),
        })
    }

    #[inline]
    pub fn league_id(&self) -> &str { &self.league_id }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        join!(&self.base, "/", endpoint.trim_start_matches('/'))
    }

    /// GET `{base}/{endpoint}?params` and decode the result-set envelope.
    pub fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsResponse> {
        let url = self.endpoint_url(endpoint);
        let t = Instant::now();

        let resp = self.http.get(&url).query(params).send()?;
        let status = resp.status();
        let final_url = resp.url().to_string();

        if !status.is_success() {
            loge!("HTTP {} for {}", status.as_u16(), final_url);
            return Err(AppError::Status { status: status.as_u16(), url: final_url });
        }

        let body = resp.text()?;
        logd!("GET {} → {} bytes in {:?}", final_url, body.len(), t.elapsed());
        StatsResponse::from_json(&body)
    }
}
