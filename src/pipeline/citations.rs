//! Citation collection and asynchronous title resolution.

use chrono::NaiveDate;
use galley_core::cite;
use galley_traits::UrlFetcher;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// One collected citation: its target plus the in-flight resolution.
pub(crate) struct PendingCitation {
    pub url: String,
    pub handle: JoinHandle<String>,
}

/// Assigns citation indices strictly in order of first appearance and
/// schedules one blocking resolution task per citation. Repeated URLs get a
/// fresh index; there is no deduplication.
pub(crate) struct CitationRegistry {
    fetcher: Arc<dyn UrlFetcher>,
    accessed: NaiveDate,
    pending: Vec<PendingCitation>,
}

impl CitationRegistry {
    pub fn new(fetcher: Arc<dyn UrlFetcher>, accessed: NaiveDate) -> Self {
        Self {
            fetcher,
            accessed,
            pending: Vec::new(),
        }
    }

    /// Rewrites the first inline link of `line` to `label [index]` and
    /// schedules its title fetch. Returns `None` when the line has no link.
    pub fn rewrite(&mut self, line: &str) -> Option<String> {
        let index = self.pending.len() as u32 + 1;
        let rewrite = cite::rewrite_first_link(line, index)?;
        log::debug!("citation [{}] -> {}", index, rewrite.url);

        let fetcher = Arc::clone(&self.fetcher);
        let url = rewrite.url.clone();
        let accessed = self.accessed;
        let handle =
            tokio::task::spawn_blocking(move || resolve_citation(fetcher.as_ref(), &url, accessed));

        self.pending.push(PendingCitation {
            url: rewrite.url,
            handle,
        });
        Some(rewrite.line)
    }

    /// Rewrites when a link is present, otherwise keeps the line unchanged.
    pub fn rewrite_or_keep(&mut self, line: &str) -> String {
        self.rewrite(line).unwrap_or_else(|| line.to_string())
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn into_pending(self) -> Vec<PendingCitation> {
        self.pending
    }
}

/// Fetches one citation page and formats the reference text. Every failure
/// path substitutes the fallback title; a bad link never aborts the pass.
fn resolve_citation(fetcher: &dyn UrlFetcher, url: &str, accessed: NaiveDate) -> String {
    let title = match fetcher.fetch(url) {
        Ok(response) if response.is_success() => match cite::extract_title(&response.body) {
            Some(title) => title,
            None => {
                log::warn!("no title in page at '{}'", url);
                cite::FALLBACK_TITLE.to_string()
            }
        },
        Ok(response) => {
            log::warn!(
                "citation fetch for '{}' returned status {}",
                url,
                response.status
            );
            cite::FALLBACK_TITLE.to_string()
        }
        Err(e) => {
            log::warn!("citation fetch for '{}' failed: {}", url, e);
            cite::FALLBACK_TITLE.to_string()
        }
    };
    cite::format_reference(&title, url, accessed)
}
