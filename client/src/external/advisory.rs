//! HTTP client for the remote advisory service
//!
//! Wraps the four JSON endpoints (crop recommendations, weather analysis,
//! yield prediction, chat). Weather analysis is the one call that retries
//! transient failures and caches successful reports for a bounded window;
//! every other call fails straight back to the caller.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use shared::{
    ChatRequest, ChatResponse, RecommendationReport, RecommendationRequest,
    WeatherAnalysisRequest, WeatherReport, YieldPredictionRequest, YieldPredictionResponse,
};

use crate::error::{AppError, AppResult};
use crate::external::retry::{retry_with, RetryPolicy};

/// Advisory service client
pub struct AdvisoryClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
    weather_cache: WeatherCache,
}

impl AdvisoryClient {
    /// Create a new AdvisoryClient
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        retry: RetryPolicy,
        weather_ttl: ChronoDuration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            retry,
            weather_cache: WeatherCache::new(weather_ttl),
        })
    }

    /// Create a client against a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        Self::new(
            base_url,
            Duration::from_secs(5),
            RetryPolicy::new(1, Duration::from_millis(1), Duration::from_millis(1)),
            ChronoDuration::seconds(0),
        )
    }

    /// Fetch crop recommendations for a location. No retry: the panel falls
    /// back to sample data on failure.
    pub async fn crop_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RecommendationReport> {
        let url = format!("{}/api/crop-recommendations", self.base_url);
        self.post_json(&url, request).await
    }

    /// Fetch the weather analysis for a (location, crop) pair, retrying
    /// transient failures with exponential backoff. Successful reports are
    /// cached so re-rendering the panel does not refetch.
    pub async fn weather_analysis(
        &self,
        request: &WeatherAnalysisRequest,
    ) -> AppResult<WeatherReport> {
        if let Some(cached) = self.weather_cache.get(request) {
            tracing::debug!(location = %request.location, crop = %request.crop, "weather cache hit");
            return Ok(cached);
        }

        let url = format!("{}/api/weather-analysis", self.base_url);
        let report: WeatherReport =
            retry_with(&self.retry, |_attempt| self.post_json(&url, request)).await?;

        self.weather_cache.insert(request, report.clone());
        Ok(report)
    }

    /// Request a yield prediction. Input must already be validated; errors
    /// surface directly since no static substitute is meaningful.
    pub async fn yield_prediction(
        &self,
        request: &YieldPredictionRequest,
    ) -> AppResult<YieldPredictionResponse> {
        let url = format!("{}/api/yield-prediction", self.base_url);
        self.post_json(&url, request).await
    }

    /// Send a chat message and wait for the assistant's reply. No retry.
    pub async fn chat(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        let url = format!("{}/api/chat", self.base_url);
        self.post_json(&url, request).await
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Network(format!(
                "{} returned {}: {}",
                url, status, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Shape(format!("unexpected response shape from {}: {}", url, e)))
    }
}

/// In-memory weather report cache keyed by (location, crop)
struct WeatherCache {
    ttl: ChronoDuration,
    entries: Mutex<HashMap<WeatherAnalysisRequest, CacheEntry>>,
}

struct CacheEntry {
    report: WeatherReport,
    fetched_at: DateTime<Utc>,
}

impl WeatherCache {
    fn new(ttl: ChronoDuration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn get(&self, key: &WeatherAnalysisRequest) -> Option<WeatherReport> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?;
        if Utc::now() - entry.fetched_at < self.ttl {
            Some(entry.report.clone())
        } else {
            None
        }
    }

    fn insert(&self, key: &WeatherAnalysisRequest, report: WeatherReport) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.clone(),
                CacheEntry {
                    report,
                    fetched_at: Utc::now(),
                },
            );
        }
    }
}
