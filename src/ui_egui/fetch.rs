// Background fetch driver
// Runs the blocking feed client off the frame loop, one thread per request

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::services::browser::FetchRequest;
use crate::services::feed::{EventFeed, FeedError, FeedPage};

/// A completed fetch, tagged with the sequence number of the request it
/// answers so the browser can discard superseded responses.
pub type FetchOutcome = (u64, Result<FeedPage, FeedError>);

/// Execute `request` on a worker thread, reporting the outcome through `tx`.
///
/// The send can fail only when the app is shutting down and the receiver is
/// gone; the result is simply dropped then.
pub fn spawn_fetch(feed: Arc<dyn EventFeed>, request: FetchRequest, tx: Sender<FetchOutcome>) {
    thread::spawn(move || {
        let result = feed.fetch_page(request.page);
        if tx.send((request.seq, result)).is_err() {
            log::debug!("Fetch #{} finished after shutdown; dropping result", request.seq);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use super::*;
    use crate::services::feed::MockEventFeed;

    #[test]
    fn test_outcome_is_tagged_with_the_request_sequence() {
        let mut mock = MockEventFeed::new();
        mock.expect_fetch_page()
            .withf(|page| *page == 4)
            .times(1)
            .returning(|_| Err(FeedError::Status(500)));

        let (tx, rx) = mpsc::channel();
        spawn_fetch(Arc::new(mock), FetchRequest { seq: 17, page: 4 }, tx);

        let (seq, result) = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker should report back");
        assert_eq!(seq, 17);
        assert!(matches!(result, Err(FeedError::Status(500))));
    }

    #[test]
    fn test_dropped_receiver_does_not_panic_the_worker() {
        let mut mock = MockEventFeed::new();
        mock.expect_fetch_page()
            .returning(|_| Err(FeedError::Network("down".to_string())));

        let (tx, rx) = mpsc::channel();
        drop(rx);
        spawn_fetch(Arc::new(mock), FetchRequest { seq: 1, page: 1 }, tx);
        // The worker logs and exits; nothing to observe beyond no panic
        std::thread::sleep(Duration::from_millis(50));
    }
}
