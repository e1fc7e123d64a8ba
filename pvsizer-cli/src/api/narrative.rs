//! Proposal narrative from a `generateContent`-style text generation API.

mod prompt;
mod response;

use std::time::Duration;

use http::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use self::{prompt::Prompt, response::Response};
use crate::{
    core::{project::ProjectDescription, result::SizingResult},
    prelude::*,
};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text used when the model returns no text at all.
pub const NO_RESPONSE: &str = "No response from the model.";

/// Generated proposal body.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    /// Markdown text.
    pub text: String,

    /// Web pages the text is grounded on.
    pub sources: Vec<Source>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

pub struct Api {
    client: Client,
    base_url: String,
    model: String,
}

impl Api {
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(api_key).context("invalid API key")?;
        api_key.set_sensitive(true);
        headers.append("x-goog-api-key", api_key);
        let client = Client::builder()
            .user_agent("pvsizer")
            .timeout(Duration::from_secs(60))
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    #[instrument(skip_all, fields(model = %self.model))]
    pub async fn generate(
        &self,
        project: &ProjectDescription,
        result: &SizingResult,
    ) -> Result<Narrative> {
        info!("generating…");
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let narrative: Narrative = self
            .client
            .post(&url)
            .json(&Prompt::new(project, result).into_request())
            .send()
            .await
            .with_context(|| format!("failed to call `{url}`"))?
            .error_for_status()
            .with_context(|| format!("`{url}` responded with an error"))?
            .json::<Response>()
            .await
            .with_context(|| format!("failed to deserialize `{url}` response JSON"))?
            .into();
        info!(
            n_characters = narrative.text.len(),
            n_sources = narrative.sources.len(),
            "generated"
        );
        Ok(narrative)
    }
}
