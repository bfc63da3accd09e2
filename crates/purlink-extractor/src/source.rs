//! Page source seam and the settling-delay capture

use std::time::Duration;

use tracing::debug;

use crate::page::ProfilePage;

/// How long to let the page settle before snapshotting it
///
/// Profile pages keep hydrating well after navigation, so a capture
/// taken too early sees a skeleton. The delay is a best-effort
/// heuristic, not a guarantee; the matcher chains still have to
/// tolerate a half-loaded document.
pub const SETTLE_DELAY: Duration = Duration::from_millis(2000);

/// Read-only access to the live host page
///
/// Implemented by the host surface (the browser side of the system).
/// The extractor only ever reads through this seam; it never writes
/// back to the page.
pub trait PageSource {
    /// Current page URL
    fn current_url(&self) -> String;

    /// Current page markup
    fn current_html(&self) -> String;
}

/// Wait out the settle delay, then snapshot the source once
///
/// The returned snapshot is what every matcher chain runs against;
/// nothing re-queries the live page after this point.
pub async fn snapshot_settled<S: PageSource>(source: &S) -> ProfilePage {
    tokio::time::sleep(SETTLE_DELAY).await;
    let page = ProfilePage::new(source.current_url(), source.current_html());
    debug!("Captured settled snapshot of '{}'", page.url());
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        url: &'static str,
        html: &'static str,
    }

    impl PageSource for FixedSource {
        fn current_url(&self) -> String {
            self.url.to_string()
        }

        fn current_html(&self) -> String {
            self.html.to_string()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_carries_source_url() {
        let source = FixedSource {
            url: "https://www.linkedin.com/in/ada",
            html: "<h1 class=\"text-heading-xlarge\">Ada</h1>",
        };

        let page = snapshot_settled(&source).await;
        assert_eq!(page.url(), "https://www.linkedin.com/in/ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_capture_waits_for_settle_delay() {
        let source = FixedSource {
            url: "u",
            html: "",
        };

        let before = tokio::time::Instant::now();
        let _ = snapshot_settled(&source).await;
        assert!(before.elapsed() >= SETTLE_DELAY);
    }
}
