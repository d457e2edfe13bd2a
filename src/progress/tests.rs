//! Tests for progress module

use super::*;

#[test]
fn test_silent_reporter_accepts_events() {
    let reporter = SilentReporter;
    reporter.page_fetched(3);
    reporter.fetch_finished(3);
    reporter.download_started(3);
    reporter.image_downloaded("https://pbs.twimg.com/media/a.jpg");
    reporter.download_finished();
}

#[test]
fn test_terminal_reporter_counts_fetched_images() {
    let reporter = TerminalReporter::new();
    reporter.page_fetched(2);
    reporter.page_fetched(0);
    reporter.page_fetched(5);
    assert_eq!(reporter.fetched(), 7);
    reporter.fetch_finished(7);
}

#[test]
fn test_terminal_reporter_counts_downloads() {
    let reporter = TerminalReporter::new();
    assert_eq!(reporter.downloaded(), None);

    // Events before the bar exists are ignored
    reporter.image_downloaded("ignored");

    reporter.download_started(2);
    assert_eq!(reporter.downloaded(), Some(0));

    reporter.image_downloaded("https://pbs.twimg.com/media/a.jpg");
    reporter.image_downloaded("https://pbs.twimg.com/media/b.jpg");
    assert_eq!(reporter.downloaded(), Some(2));
    reporter.download_finished();
}

#[test]
fn test_reporters_are_object_safe() {
    let reporters: Vec<Box<dyn ProgressReporter>> =
        vec![Box::new(SilentReporter), Box::new(TerminalReporter::new())];
    for reporter in &reporters {
        reporter.page_fetched(1);
    }
}
