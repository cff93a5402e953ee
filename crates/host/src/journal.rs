//! Bounded record of received control requests
//!
//! Oldest entries are evicted once `capacity` is reached.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use servo_web_protocol::ControlPath;

/// One received control request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    /// Arrival order, starting at 1; keeps counting across evictions
    pub seq: u64,
    /// Milliseconds since the Unix epoch
    pub received_ms: u64,
    pub path: String,
    pub command: ControlPath,
}

#[derive(Debug)]
pub struct CommandJournal {
    capacity: usize,
    next_seq: u64,
    entries: VecDeque<JournalEntry>,
}

impl CommandJournal {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_seq: 1,
            entries: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// Append a request, evicting the oldest if full. Returns its sequence number.
    pub fn record(&mut self, command: ControlPath) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        if self.capacity == 0 {
            return seq;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }

        let received_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        self.entries.push_back(JournalEntry {
            seq,
            received_ms,
            path: command.to_string(),
            command,
        });
        seq
    }

    /// Entries oldest first
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Most recent request, if any
    pub fn last(&self) -> Option<&JournalEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pwm(v: u32) -> ControlPath {
        ControlPath::Pwm {
            value: v.to_string(),
        }
    }

    #[test]
    fn test_records_in_order() {
        let mut journal = CommandJournal::new(8);
        assert_eq!(journal.record(pwm(1)), 1);
        assert_eq!(journal.record(pwm(2)), 2);

        let paths: Vec<String> = journal.entries().into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/pwm/1", "/pwm/2"]);
        assert_eq!(journal.last().unwrap().seq, 2);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut journal = CommandJournal::new(3);
        for v in 0..10 {
            journal.record(pwm(v));
            assert!(journal.len() <= 3);
        }
        let seqs: Vec<u64> = journal.entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![8, 9, 10]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut journal = CommandJournal::new(0);
        assert_eq!(journal.record(pwm(1)), 1);
        assert_eq!(journal.record(pwm(2)), 2);
        assert!(journal.is_empty());
    }

    #[test]
    fn test_clear_keeps_sequence() {
        let mut journal = CommandJournal::new(4);
        journal.record(pwm(1));
        journal.clear();
        assert!(journal.is_empty());
        assert_eq!(journal.record(pwm(2)), 2);
    }
}
