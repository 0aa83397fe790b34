use std::collections::VecDeque;

use gloo_net::http::{Request, Response};
use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Reflect, Uint8Array};
use web_sys::{AbortController, ReadableStreamDefaultReader};

use super::cancel::CancelToken;
use super::error::RelayError;
use super::sse::FragmentDecoder;
use super::wire::{GenerateContentRequest, GenerateContentResponse};
use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct GeminiClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<&str>, base_url: &str, model: &str) -> Self {
        Self {
            api_key: api_key.map(str::to_string),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_api_key(), config::get_api_base_url(), config::get_model())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn endpoint(&self, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, self.model, method)
    }

    fn api_key(&self) -> Result<&str, RelayError> {
        self.api_key.as_deref().ok_or(RelayError::MissingApiKey)
    }

    /// One request, one complete response.
    pub async fn generate_content(
        &self,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, RelayError> {
        let api_key = self.api_key()?;
        let response = Request::post(&self.endpoint("generateContent"))
            .header("x-goog-api-key", api_key)
            .json(body)?
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Opens a streamed reply. The fetch is aborted when `cancel` fires.
    pub async fn stream_generate_content(
        &self,
        body: &GenerateContentRequest,
        cancel: &CancelToken,
    ) -> Result<ChatStream, RelayError> {
        let api_key = self.api_key()?;
        if cancel.is_cancelled() {
            return Err(RelayError::Cancelled);
        }

        let controller = AbortController::new().map_err(|e| RelayError::Request(js_error_text(&e)))?;
        let signal = controller.signal();
        cancel.on_cancel(move || controller.abort());

        let url = format!("{}?alt=sse", self.endpoint("streamGenerateContent"));
        info!("Opening chat stream with {} message(s) of history", body.contents.len());
        let response = Request::post(&url)
            .header("x-goog-api-key", api_key)
            .abort_signal(Some(&signal))
            .json(body)?
            .send()
            .await
            .map_err(|e| if cancel.is_cancelled() { RelayError::Cancelled } else { e.into() })?;
        let response = ensure_success(response).await?;

        let body = response
            .body()
            .ok_or_else(|| RelayError::Stream("response has no body".to_string()))?;
        let reader = body.get_reader().unchecked_into::<ReadableStreamDefaultReader>();
        Ok(ChatStream::new(BodyReader { reader }, cancel.clone()))
    }
}

async fn ensure_success(response: Response) -> Result<Response, RelayError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(RelayError::Status { status, body })
}

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

struct BodyReader {
    reader: ReadableStreamDefaultReader,
}

impl BodyReader {
    async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, RelayError> {
        let result = JsFuture::from(self.reader.read())
            .await
            .map_err(|e| RelayError::Stream(js_error_text(&e)))?;
        let done = Reflect::get(&result, &JsValue::from_str("done"))
            .map_err(|e| RelayError::Stream(js_error_text(&e)))?
            .as_bool()
            .unwrap_or(false);
        if done {
            return Ok(None);
        }
        let value = Reflect::get(&result, &JsValue::from_str("value"))
            .map_err(|e| RelayError::Stream(js_error_text(&e)))?;
        Ok(Some(Uint8Array::new(&value).to_vec()))
    }
}

/// Text fragments of one streamed reply, in arrival order.
///
/// The stream is single-use: once it has returned `Ok(None)` or an error it
/// keeps returning `Ok(None)`.
pub struct ChatStream {
    reader: Option<BodyReader>,
    decoder: FragmentDecoder,
    ready: VecDeque<String>,
    cancel: CancelToken,
}

impl ChatStream {
    fn new(reader: BodyReader, cancel: CancelToken) -> Self {
        Self {
            reader: Some(reader),
            decoder: FragmentDecoder::default(),
            ready: VecDeque::new(),
            cancel,
        }
    }

    pub async fn next_fragment(&mut self) -> Result<Option<String>, RelayError> {
        loop {
            if self.cancel.is_cancelled() {
                self.close();
                return Err(RelayError::Cancelled);
            }
            if let Some(fragment) = self.ready.pop_front() {
                return Ok(Some(fragment));
            }
            let Some(reader) = self.reader.as_mut() else {
                return Ok(None);
            };
            match reader.next_chunk().await {
                Ok(Some(bytes)) => {
                    let fragments = self.decoder.push(&bytes);
                    self.absorb(fragments)?;
                }
                Ok(None) => {
                    debug!("Chat stream finished");
                    self.reader = None;
                    let tail = self.decoder.finish().map(|tail| tail.into_iter().collect());
                    self.absorb(tail)?;
                }
                Err(err) => {
                    self.close();
                    if self.cancel.is_cancelled() {
                        return Err(RelayError::Cancelled);
                    }
                    return Err(err);
                }
            }
        }
    }

    fn absorb(&mut self, fragments: Result<Vec<String>, RelayError>) -> Result<(), RelayError> {
        match fragments {
            Ok(fragments) => {
                self.ready.extend(fragments);
                Ok(())
            }
            Err(err) => {
                self.close();
                Err(err)
            }
        }
    }

    fn close(&mut self) {
        self.reader = None;
        self.ready.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model_and_method() {
        let client = GeminiClient::new(Some("k"), "https://example.test/v1beta/", "gemini-3-flash-preview");
        assert_eq!(
            client.endpoint("generateContent"),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_missing_api_key_is_reported() {
        let client = GeminiClient::new(None, "https://example.test", "m");
        assert!(!client.has_api_key());
        assert_eq!(client.api_key(), Err(RelayError::MissingApiKey));
    }
}
