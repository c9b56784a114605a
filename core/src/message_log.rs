use alloc::collections::VecDeque;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Short event history shown to the players, newest message first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    messages: VecDeque<String>,
}

impl MessageLog {
    pub const CAPACITY: usize = 5;

    pub fn new(first: impl Into<String>) -> Self {
        let mut log = Self {
            messages: VecDeque::with_capacity(Self::CAPACITY),
        };
        log.push(first);
        log
    }

    /// Adds `message` in front, dropping the oldest once over capacity.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push_front(message.into());
        self.messages.truncate(Self::CAPACITY);
    }

    pub fn latest(&self) -> Option<&str> {
        self.messages.front().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn keeps_newest_first_and_drops_beyond_capacity() {
        let mut log = MessageLog::new("m0");
        for i in 1..=6 {
            log.push(format!("m{i}"));
        }

        let messages: Vec<_> = log.iter().collect();
        assert_eq!(messages, ["m6", "m5", "m4", "m3", "m2"]);
        assert_eq!(log.latest(), Some("m6"));
    }

    #[test]
    fn new_log_holds_only_the_first_message() {
        let log = MessageLog::new("hello");
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest(), Some("hello"));
    }
}
