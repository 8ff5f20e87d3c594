use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response};

use super::{ProviderError, SynthesisParams, VoiceProvider};

const XI_API_KEY_HEADER: &str = "xi-api-key";

pub struct ElevenLabsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabsClient {
    pub fn new(
        api_key: String,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Turns a non-2xx response into a `ProviderError::Status`, keeping the body
/// as JSON when it parses and as text otherwise.
async fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Failed to read provider error body (HTTP {}): {}", status, e);
            String::new()
        }
    };
    let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));

    Err(ProviderError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl VoiceProvider for ElevenLabsClient {
    async fn voices_raw(&self) -> Result<serde_json::Value, ProviderError> {
        let response = self
            .client
            .get(self.url("voices"))
            .header(XI_API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let response = check_status(response).await?;
        tracing::debug!("ElevenLabs voices response status: {}", response.status());

        response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    async fn synthesize(
        &self,
        voice_id: &str,
        params: &SynthesisParams,
    ) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .post(self.url(&format!("text-to-speech/{}", voice_id)))
            .header(XI_API_KEY_HEADER, &self.api_key)
            .header(header::ACCEPT, "audio/mpeg")
            .json(params)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let response = check_status(response).await?;

        let audio = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Transport(format!("Failed to read audio bytes: {}", e)))?;

        Ok(audio.to_vec())
    }
}
