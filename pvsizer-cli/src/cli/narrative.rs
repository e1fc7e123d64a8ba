use clap::Parser;

use crate::{
    api::narrative::{Api, DEFAULT_BASE_URL, DEFAULT_MODEL},
    prelude::*,
};

#[derive(Parser)]
pub struct NarrativeArgs {
    /// Text generation API key, the proposal is written without the narrative when absent.
    #[clap(long = "narrative-api-key", env = "NARRATIVE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[clap(long = "narrative-model", env = "NARRATIVE_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    #[clap(
        long = "narrative-api-base-url",
        env = "NARRATIVE_API_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,
}

impl NarrativeArgs {
    /// Build the API client, if the key is configured.
    pub fn api(&self) -> Result<Option<Api>> {
        self.api_key
            .as_deref()
            .map(|api_key| Api::new(api_key, self.base_url.as_str(), self.model.as_str()))
            .transpose()
    }
}
