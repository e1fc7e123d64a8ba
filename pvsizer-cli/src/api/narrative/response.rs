use serde::Deserialize;

use super::{NO_RESPONSE, Narrative, Source};

#[derive(Deserialize)]
pub struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}

impl From<Response> for Narrative {
    /// Only the first candidate counts.
    fn from(response: Response) -> Self {
        let Some(candidate) = response.candidates.into_iter().next() else {
            return Self { text: NO_RESPONSE.to_string(), sources: Vec::new() };
        };
        let text: String = candidate
            .content
            .into_iter()
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect();
        let sources = candidate
            .grounding_metadata
            .into_iter()
            .flat_map(|metadata| metadata.grounding_chunks)
            .filter_map(|chunk| chunk.web)
            .filter_map(|web| match (web.uri, web.title) {
                (Some(uri), Some(title)) if !uri.is_empty() && !title.is_empty() => {
                    Some(Source { uri, title })
                }
                _ => None,
            })
            .collect();
        Self { text: if text.is_empty() { NO_RESPONSE.to_string() } else { text }, sources }
    }
}
