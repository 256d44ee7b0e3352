// file: src/stream/framing.rs
// description: incremental line framing over a chunked byte stream
// reference: event-stream framing, one event per `data: `-prefixed line

/// Splits an incoming byte stream into complete text lines.
///
/// Chunk boundaries are arbitrary: a chunk may end mid-line and mid-way
/// through a multi-byte UTF-8 sequence. Incomplete trailing bytes are
/// carried over verbatim and only decoded once their terminating newline
/// arrives, so a split multi-byte character is never turned into
/// replacement characters.
#[derive(Debug, Default)]
pub struct EventFrameDecoder {
    carry: Vec<u8>,
}

impl EventFrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, returning every line completed by it (in order).
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.carry.extend_from_slice(chunk);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.carry[start..].iter().position(|&b| b == b'\n') {
            let end = start + offset;
            lines.push(decode_line(&self.carry[start..end]));
            start = end + 1;
        }
        self.carry.drain(..start);

        lines
    }

    /// Flush the unterminated tail after the byte source ends.
    pub fn finish(self) -> Option<String> {
        if self.carry.is_empty() {
            None
        } else {
            Some(decode_line(&self.carry))
        }
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = match bytes {
        [head @ .., b'\r'] => head,
        other => other,
    };
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_chunk_multiple_lines() {
        let mut decoder = EventFrameDecoder::new();
        let lines = decoder.feed(b"data: one\n\ndata: two\n");
        assert_eq!(lines, vec!["data: one", "", "data: two"]);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn test_line_split_across_chunks() {
        let mut decoder = EventFrameDecoder::new();
        assert!(decoder.feed(b"data: par").is_empty());
        let lines = decoder.feed(b"tial\ndata: next");
        assert_eq!(lines, vec!["data: partial"]);
        assert_eq!(decoder.finish(), Some("data: next".to_string()));
    }

    #[test]
    fn test_multibyte_character_split_at_chunk_boundary() {
        // "日" is e6 97 a5; cut after the first byte
        let encoded = "data: 日本\n".as_bytes();
        let mut decoder = EventFrameDecoder::new();
        assert!(decoder.feed(&encoded[..7]).is_empty());
        let lines = decoder.feed(&encoded[7..]);
        assert_eq!(lines, vec!["data: 日本"]);
    }

    #[test]
    fn test_crlf_terminator_stripped() {
        let mut decoder = EventFrameDecoder::new();
        let lines = decoder.feed(b"data: x\r\n");
        assert_eq!(lines, vec!["data: x"]);
    }

    #[test]
    fn test_finish_flushes_unterminated_tail() {
        let mut decoder = EventFrameDecoder::new();
        assert!(decoder.feed(b"trailing without newline").is_empty());
        assert_eq!(
            decoder.finish(),
            Some("trailing without newline".to_string())
        );
    }

    #[test]
    fn test_empty_feed_is_noop() {
        let mut decoder = EventFrameDecoder::new();
        assert!(decoder.feed(b"").is_empty());
        assert_eq!(decoder.finish(), None);
    }
}
