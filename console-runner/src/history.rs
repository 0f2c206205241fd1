use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::SystemTime;

use console_transport::HttpMethod;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("history store is poisoned")]
    Poisoned,
    #[error("history store rejected the entry: {0}")]
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub time: SystemTime,
    pub method: HttpMethod,
    pub endpoint: String,
    pub data: Option<String>,
}

/// Sink for successfully sent requests.
pub trait History: Send + Sync {
    fn add(&self, method: HttpMethod, endpoint: &str, data: Option<&str>)
        -> Result<(), HistoryError>;
}

/// Bounded in-memory history, newest first.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Mutex<VecDeque<HistoryEntry>>,
    limit: usize,
}

impl MemoryHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            limit,
        }
    }

    pub fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let entries = self.entries.lock().map_err(|_| HistoryError::Poisoned)?;
        Ok(entries.iter().cloned().collect())
    }

    pub fn clear(&self) -> Result<(), HistoryError> {
        self.entries
            .lock()
            .map_err(|_| HistoryError::Poisoned)?
            .clear();
        Ok(())
    }
}

impl History for MemoryHistory {
    fn add(
        &self,
        method: HttpMethod,
        endpoint: &str,
        data: Option<&str>,
    ) -> Result<(), HistoryError> {
        let mut entries = self.entries.lock().map_err(|_| HistoryError::Poisoned)?;
        entries.push_front(HistoryEntry {
            time: SystemTime::now(),
            method,
            endpoint: endpoint.to_string(),
            data: data.map(str::to_string),
        });
        entries.truncate(self.limit);
        Ok(())
    }
}
