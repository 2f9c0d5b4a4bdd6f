//! Line framer for the serial command stream
//!
//! Input arrives in arbitrary chunks; commands are newline-delimited text.
//! A chunk without any delimiter is flushed immediately as a complete
//! command — the host-side protocol relies on this, so it is preserved even
//! though it can truncate a command split across reads. `strict` mode holds
//! the buffer until a delimiter arrives instead.

use bytes::BytesMut;

/// Accumulates raw bytes and yields complete command strings
#[derive(Debug, Default)]
pub struct LineFramer {
    /// Carry-over tail retained between reads
    buffer: BytesMut,
    /// Wait for a delimiter instead of flushing delimiter-less chunks
    strict: bool,
}

impl LineFramer {
    /// Create a framer with the default flush-on-no-delimiter policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a framer that only emits on an explicit delimiter
    pub fn strict() -> Self {
        Self {
            buffer: BytesMut::new(),
            strict: true,
        }
    }

    /// Feed a chunk of raw bytes, returning every command it completes
    ///
    /// Commands are trimmed of surrounding whitespace (including `\r`);
    /// lines that trim to empty are dropped. Invalid UTF-8 is replaced
    /// rather than treated as an error.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut commands = Vec::new();

        if self.buffer.contains(&b'\n') {
            while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let line = self.buffer.split_to(pos + 1);
                push_trimmed(&mut commands, &line[..pos]);
            }
            // The tail (possibly empty) stays as carry-over.
        } else if !self.strict && !self.buffer.is_empty() {
            // No delimiter anywhere: treat the whole buffer as one command.
            let whole = self.buffer.split();
            push_trimmed(&mut commands, &whole);
        }

        commands
    }

    /// Current carry-over length
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

fn push_trimmed(out: &mut Vec<String>, raw: &[u8]) {
    let text = String::from_utf8_lossy(raw);
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_complete_line() {
        let mut framer = LineFramer::new();
        assert_eq!(framer.feed(b"getListDevice\n"), vec!["getListDevice"]);
        assert_eq!(framer.buffered(), 0);
    }

    #[test]
    fn test_crlf_trimmed() {
        let mut framer = LineFramer::new();
        assert_eq!(framer.feed(b"helloMaster\r\n"), vec!["helloMaster"]);
    }

    #[test]
    fn test_multiple_lines_one_chunk() {
        let mut framer = LineFramer::new();
        let commands = framer.feed(b"helloMaster\ngetDataNow\n");
        assert_eq!(commands, vec!["helloMaster", "getDataNow"]);
    }

    #[test]
    fn test_tail_carried_over() {
        let mut framer = LineFramer::new();
        let commands = framer.feed(b"helloMaster\ngetList");
        assert_eq!(commands, vec!["helloMaster"]);
        assert_eq!(framer.buffered(), 7);

        let commands = framer.feed(b"Device\n");
        assert_eq!(commands, vec!["getListDevice"]);
        assert_eq!(framer.buffered(), 0);
    }

    #[test]
    fn test_empty_lines_dropped() {
        let mut framer = LineFramer::new();
        assert!(framer.feed(b"\r\n\n  \n").is_empty());
    }

    #[test]
    fn test_no_delimiter_flushes_whole_chunk() {
        // Documented fragile policy: a chunk with no delimiter is emitted
        // immediately, so a command split across reads comes out truncated.
        let mut framer = LineFramer::new();
        assert_eq!(framer.feed(b"get"), vec!["get"]);
        assert_eq!(framer.feed(b"ListDevice\n"), vec!["ListDevice"]);
    }

    #[test]
    fn test_strict_mode_waits_for_delimiter() {
        let mut framer = LineFramer::strict();
        assert!(framer.feed(b"get").is_empty());
        assert_eq!(framer.feed(b"ListDevice\n"), vec!["getListDevice"]);
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        let mut framer = LineFramer::new();
        let commands = framer.feed(b"hello\xff\n");
        assert_eq!(commands.len(), 1);
        assert!(commands[0].starts_with("hello"));
    }

    #[test]
    fn test_empty_chunk_emits_nothing() {
        let mut framer = LineFramer::new();
        assert!(framer.feed(b"").is_empty());
    }
}
