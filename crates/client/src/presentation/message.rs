//! Bounded message log shown under the map.
use std::collections::VecDeque;

use runtime::MessageKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub kind: MessageKind,
    pub speaker: Option<String>,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
            speaker: None,
        }
    }

    #[must_use]
    pub fn with_speaker(mut self, speaker: Option<String>) -> Self {
        self.speaker = speaker;
        self
    }

    /// Text as displayed, prefixed with the speaker when there is one.
    pub fn display_text(&self) -> String {
        match &self.speaker {
            Some(speaker) => format!("{speaker}: {}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Ring buffer: once full, the oldest entry is dropped.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(text: &str) -> MessageEntry {
        MessageEntry::new(text, MessageKind::Info)
    }

    #[test]
    fn drops_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.push(info("one"));
        log.push(info("two"));
        log.push(info("three"));

        let texts: Vec<_> = log.recent(5).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["three", "two"]);
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut log = MessageLog::new(0);
        log.push(info("a"));
        log.push(info("b"));
        assert_eq!(log.recent(5).count(), 1);
    }

    #[test]
    fn speaker_prefixes_display_text() {
        let entry = MessageEntry::new("Hello", MessageKind::Dialogue)
            .with_speaker(Some("Mentor".to_string()));
        assert_eq!(entry.display_text(), "Mentor: Hello");
        assert_eq!(MessageEntry::new("plain", MessageKind::Info).display_text(), "plain");
    }
}
