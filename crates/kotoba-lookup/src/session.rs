use std::time::{Duration, Instant};

use crate::client::JishoClient;
use crate::error::LookupError;
use crate::rank::rank_exact_first;
use crate::throttle::{RequestThrottle, ThrottleRejection};
use crate::transport::HttpTransport;
use crate::types::RemoteWord;

pub const NOT_FOUND_MESSAGE: &str = "未找到相关词条。";

/// What happened to a submitted search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Request may go out for this trimmed keyword; call `finish` with its outcome
    Started(String),
    /// Another request is in flight; ignored without a message
    Busy,
    /// Too soon after the previous request start
    Throttled,
    /// Blank keyword cleared the results
    Cleared,
}

/// Interactive lookup state: results, message and loading flag.
///
/// Owned by one task; the network call itself happens between
/// `begin` and `finish`, wherever the caller chooses to run it.
#[derive(Debug)]
pub struct LookupSession {
    throttle: RequestThrottle,
    keyword: String,
    results: Vec<RemoteWord>,
    error_message: Option<String>,
}

impl LookupSession {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            throttle: RequestThrottle::new(cooldown),
            keyword: String::new(),
            results: Vec::new(),
            error_message: None,
        }
    }

    pub fn begin(&mut self, keyword: &str, now: Instant) -> Submission {
        match self.throttle.check(now) {
            Err(ThrottleRejection::Busy) => {
                tracing::debug!("Lookup already in flight, ignoring '{}'", keyword);
                return Submission::Busy;
            }
            Err(ThrottleRejection::TooFrequent) => {
                self.error_message = Some(LookupError::Throttled.to_string());
                return Submission::Throttled;
            }
            Ok(()) => {}
        }

        let keyword = keyword.trim();
        if keyword.is_empty() {
            self.keyword.clear();
            self.results.clear();
            self.error_message = None;
            return Submission::Cleared;
        }

        if self.throttle.try_acquire(now).is_err() {
            return Submission::Busy;
        }
        self.keyword = keyword.to_string();
        self.error_message = None;

        Submission::Started(self.keyword.clone())
    }

    pub fn finish(&mut self, outcome: Result<Vec<RemoteWord>, LookupError>) {
        self.throttle.release();

        match outcome {
            Ok(words) => {
                self.error_message = words.is_empty().then(|| NOT_FOUND_MESSAGE.to_string());
                self.results = words;
            }
            Err(e) => {
                tracing::warn!("Lookup '{}' failed ({}): {:?}", self.keyword, e.kind(), e);
                self.results.clear();
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// `begin`, run the request, `finish`
    pub async fn submit<T: HttpTransport>(
        &mut self,
        client: &JishoClient<T>,
        keyword: &str,
    ) -> Submission {
        let submission = self.begin(keyword, Instant::now());
        if let Submission::Started(keyword) = &submission {
            let outcome = client.search(keyword).await;
            self.finish(outcome);
        }
        submission
    }

    pub fn is_loading(&self) -> bool {
        self.throttle.in_flight()
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn results(&self) -> &[RemoteWord] {
        &self.results
    }

    /// Results with exact matches on the current keyword first
    pub fn ranked(&self) -> Vec<&RemoteWord> {
        rank_exact_first(&self.keyword, &self.results)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
