// SPDX-License-Identifier: MIT
//! Priority classification client.
//!
//! Calls the external classification service once per task creation. The
//! service is best-effort: any failure — connection error, non-2xx status,
//! malformed body, missing or empty `priority` field — degrades to
//! [`Classification::Unavailable`], and the caller falls back to
//! [`DEFAULT_PRIORITY`]. Failures are logged and never propagated: task
//! creation must not fail because the classifier is down.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Priority used when the classifier is unavailable or returns nothing usable.
pub const DEFAULT_PRIORITY: &str = "medium";

// ─── Result type ──────────────────────────────────────────────────────────────

/// Outcome of a single classification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The service answered with a usable priority label.
    Classified(String),
    /// The service could not be reached or returned nothing usable.
    Unavailable,
}

impl Classification {
    /// Collapse to a concrete priority, substituting the default.
    ///
    /// This is the single point where the failure path folds back into the
    /// success shape — the HTTP response looks the same either way.
    pub fn into_priority(self) -> String {
        match self {
            Classification::Classified(priority) => priority,
            Classification::Unavailable => DEFAULT_PRIORITY.to_string(),
        }
    }
}

// ─── Wire types ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// The service also returns `category` and `confidence`; only `priority` is
/// consumed here.
#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    priority: Option<String>,
}

// ─── Client ───────────────────────────────────────────────────────────────────

pub struct ClassifierClient {
    base_url: String,
}

impl ClassifierClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ask the service to classify `text`. Infallible by design — every
    /// failure mode collapses to [`Classification::Unavailable`].
    pub async fn classify(&self, text: &str) -> Classification {
        match self.request(text).await {
            Ok(Some(priority)) if !priority.is_empty() => {
                Classification::Classified(priority)
            }
            Ok(_) => {
                warn!("classifier response had no usable priority, using default");
                Classification::Unavailable
            }
            Err(e) => {
                warn!("classifier unavailable, using default priority: {e:#}");
                Classification::Unavailable
            }
        }
    }

    async fn request(&self, text: &str) -> anyhow::Result<Option<String>> {
        let url = format!("{}/predict", self.base_url);
        // No explicit timeout — a slow classifier just delays the create
        // response; it never fails it.
        let client = reqwest::Client::builder().build()?;
        let resp = client
            .post(&url)
            .json(&PredictRequest { text })
            .send()
            .await?
            .error_for_status()?;
        let body: PredictResponse = resp.json().await?;
        Ok(body.priority)
    }
}
