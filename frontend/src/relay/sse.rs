//! Server-sent event framing for `streamGenerateContent?alt=sse`.

use super::error::RelayError;
use super::wire::GenerateContentResponse;

/// Splits a byte stream into the `data:` payloads of complete events.
/// Events and lines may be split anywhere across chunks.
#[derive(Default)]
pub struct SseDecoder {
    pending: Vec<u8>,
    data: Vec<String>,
}

impl SseDecoder {
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut events = Vec::new();
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let raw: Vec<u8> = self.pending.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw).into_owned();
            if let Some(event) = self.take_line(line.trim_end_matches(|c: char| c == '\n' || c == '\r')) {
                events.push(event);
            }
        }
        events
    }

    /// Flushes an event the server ended without a trailing blank line.
    pub fn finish(&mut self) -> Option<String> {
        if !self.pending.is_empty() {
            let raw = std::mem::take(&mut self.pending);
            let line = String::from_utf8_lossy(&raw).into_owned();
            if let Some(event) = self.take_line(line.trim_end_matches('\r')) {
                return Some(event);
            }
        }
        self.dispatch()
    }

    fn take_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            return self.dispatch();
        }
        if let Some(value) = line.strip_prefix("data:") {
            self.data.push(value.strip_prefix(' ').unwrap_or(value).to_string());
        }
        // event:, id:, retry: and ":" comments carry nothing we use
        None
    }

    fn dispatch(&mut self) -> Option<String> {
        if self.data.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.data).join("\n"))
        }
    }
}

/// Turns raw stream bytes into the text fragments of the reply.
#[derive(Default)]
pub struct FragmentDecoder {
    sse: SseDecoder,
}

impl FragmentDecoder {
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<String>, RelayError> {
        self.sse
            .push(chunk)
            .iter()
            .filter_map(|payload| fragment_of(payload).transpose())
            .collect()
    }

    pub fn finish(&mut self) -> Result<Option<String>, RelayError> {
        match self.sse.finish() {
            Some(payload) => fragment_of(&payload),
            None => Ok(None),
        }
    }
}

fn fragment_of(payload: &str) -> Result<Option<String>, RelayError> {
    let response: GenerateContentResponse = serde_json::from_str(payload)?;
    if let Some(error) = response.error {
        return Err(RelayError::Stream(format!(
            "{} {}: {}",
            error.code, error.status, error.message
        )));
    }
    Ok(response.text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(text: &str) -> String {
        format!(
            "data: {{\"candidates\":[{{\"content\":{{\"role\":\"model\",\"parts\":[{{\"text\":\"{}\"}}]}}}}]}}\r\n\r\n",
            text
        )
    }

    #[test]
    fn test_decoder_yields_complete_events_only() {
        let mut decoder = SseDecoder::default();
        assert!(decoder.push(b"data: one").is_empty());
        assert_eq!(decoder.push(b"\n\ndata: two\n"), vec!["one".to_string()]);
        assert_eq!(decoder.push(b"\n"), vec!["two".to_string()]);
    }

    #[test]
    fn test_decoder_joins_multiline_data_and_ignores_other_fields() {
        let mut decoder = SseDecoder::default();
        let events = decoder.push(b": keepalive\nevent: message\ndata: a\ndata: b\nid: 7\n\n");
        assert_eq!(events, vec!["a\nb".to_string()]);
    }

    #[test]
    fn test_decoder_finish_flushes_unterminated_event() {
        let mut decoder = SseDecoder::default();
        assert!(decoder.push(b"data: tail").is_empty());
        assert_eq!(decoder.finish().as_deref(), Some("tail"));
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn test_decoder_finish_keeps_event_closed_by_bare_carriage_return() {
        let mut decoder = SseDecoder::default();
        assert!(decoder.push(b"data: last\n\r").is_empty());
        assert_eq!(decoder.finish().as_deref(), Some("last"));
    }

    #[test]
    fn test_fragments_survive_arbitrary_chunk_boundaries() {
        let body = format!("{}{}{}", event("Grow "), event("your "), event("brand"));
        let bytes = body.as_bytes();
        for split in [1usize, 3, 7, 64] {
            let mut decoder = FragmentDecoder::default();
            let mut fragments = Vec::new();
            for chunk in bytes.chunks(split) {
                fragments.extend(decoder.push(chunk).unwrap());
            }
            assert_eq!(decoder.finish().unwrap(), None);
            assert_eq!(fragments, vec!["Grow ", "your ", "brand"]);
        }
    }

    #[test]
    fn test_multibyte_text_split_mid_character() {
        let body = event("₹10,000");
        let bytes = body.as_bytes();
        let rupee = body.find('₹').unwrap();
        let mut decoder = FragmentDecoder::default();
        assert!(decoder.push(&bytes[..rupee + 1]).unwrap().is_empty());
        assert_eq!(decoder.push(&bytes[rupee + 1..]).unwrap(), vec!["₹10,000".to_string()]);
    }

    #[test]
    fn test_events_without_text_are_skipped() {
        let mut decoder = FragmentDecoder::default();
        let fragments = decoder
            .push(b"data: {\"candidates\":[{\"finishReason\":\"STOP\"}]}\n\n")
            .unwrap();
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let mut decoder = FragmentDecoder::default();
        let err = decoder.push(b"data: {not json\n\n").unwrap_err();
        assert!(matches!(err, RelayError::Malformed(_)));
    }

    #[test]
    fn test_in_band_error_event_is_an_error() {
        let mut decoder = FragmentDecoder::default();
        let body = format!(
            "{}data: {{\"error\":{{\"code\":503,\"message\":\"The model is overloaded.\",\"status\":\"UNAVAILABLE\"}}}}\r\n\r\n",
            event("Partial ")
        );
        let err = decoder.push(body.as_bytes()).unwrap_err();
        match err {
            RelayError::Stream(reason) => {
                assert!(reason.contains("503"));
                assert!(reason.contains("The model is overloaded."));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
