use std::cell::RefCell;
use std::collections::HashMap;

use futures::FutureExt;
use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

#[derive(Default)]
struct FakeSlot {
    markup: RefCell<Option<String>>,
    error: RefCell<Option<String>>,
}

impl PartialSlot for &FakeSlot {
    fn fill(&self, _path: &str, markup: &str) {
        *self.markup.borrow_mut() = Some(markup.to_owned());
    }

    fn fail(&self, err: &SiteError) {
        *self.error.borrow_mut() = Some(error_text(err));
    }
}

/// Serves `/missing.html` as a 404 and echoes every other path.
async fn fake_fetch(path: String) -> Result<String> {
    if path == "/missing.html" {
        check_status(&path, 404, "Not Found")?;
    }
    Ok(format!("<nav>{path}</nav>"))
}

#[test]
fn check_status_accepts_2xx() {
    assert!(check_status("/nav.html", 200, "OK").is_ok());
    assert!(check_status("/nav.html", 204, "No Content").is_ok());
}

#[test]
fn check_status_rejects_not_found() {
    let err = check_status("/missing.html", 404, "Not Found").unwrap_err();
    assert!(matches!(err, SiteError::PartialStatus { status: 404, .. }));
    assert_eq!(err.to_string(), "failed to load /missing.html: HTTP 404 Not Found");
}

#[test]
fn check_status_rejects_redirect_and_server_error() {
    assert!(check_status("/a.html", 304, "Not Modified").is_err());
    assert!(check_status("/a.html", 500, "Internal Server Error").is_err());
}

#[test]
fn error_text_carries_failure_reason() {
    let err = check_status("/missing.html", 404, "Not Found").unwrap_err();
    let text = error_text(&err);
    assert!(text.contains("/missing.html"));
    assert!(text.contains("404 Not Found"));
}

#[test]
fn error_text_for_transport_failure() {
    let err = SiteError::PartialTransport { path: "/footer.html".into(), message: "network down".into() };
    assert!(error_text(&err).contains("failed to load /footer.html: network down"));
}

#[test]
fn tally_counts_both_outcomes() {
    let report = LoadReport::tally(&[true, false, true]);
    assert_eq!(report, LoadReport { loaded: 2, failed: 1 });
    assert_eq!(LoadReport::tally(&[]), LoadReport::default());
}

// =============================================================
// load_each
// =============================================================

#[test]
fn missing_partial_fails_alone() {
    let header = FakeSlot::default();
    let missing = FakeSlot::default();
    let footer = FakeSlot::default();
    let slots = vec![
        (&header, "/header.html".to_owned()),
        (&missing, "/missing.html".to_owned()),
        (&footer, "/footer.html".to_owned()),
    ];

    let report = block_on(load_each(slots, fake_fetch));

    assert_eq!(report, LoadReport { loaded: 2, failed: 1 });
    assert_eq!(header.markup.borrow().as_deref(), Some("<nav>/header.html</nav>"));
    assert_eq!(footer.markup.borrow().as_deref(), Some("<nav>/footer.html</nav>"));
    assert!(missing.markup.borrow().is_none());
    let error = missing.error.borrow().clone().unwrap();
    assert!(error.contains("/missing.html"));
    assert!(error.contains("404"));
    assert!(header.error.borrow().is_none());
}

#[test]
fn no_slots_resolves_empty() {
    let report = block_on(load_each(Vec::<(&FakeSlot, String)>::new(), fake_fetch));
    assert_eq!(report, LoadReport::default());
}

#[test]
fn resolves_only_after_every_fetch_settles() {
    let first = FakeSlot::default();
    let second = FakeSlot::default();
    let (first_tx, first_rx) = oneshot::channel::<Result<String>>();
    let (second_tx, second_rx) = oneshot::channel::<Result<String>>();
    let pending = RefCell::new(HashMap::from([
        ("/first.html".to_owned(), first_rx),
        ("/second.html".to_owned(), second_rx),
    ]));

    let fetch = |path: String| {
        let rx = pending.borrow_mut().remove(&path).unwrap();
        async move { rx.await.unwrap() }
    };
    let slots = vec![(&first, "/first.html".to_owned()), (&second, "/second.html".to_owned())];
    let mut load = Box::pin(load_each(slots, fetch));

    assert!((&mut load).now_or_never().is_none());

    first_tx.send(Ok("<p>first</p>".to_owned())).unwrap();
    assert!((&mut load).now_or_never().is_none());
    assert_eq!(first.markup.borrow().as_deref(), Some("<p>first</p>"));
    assert!(second.markup.borrow().is_none());

    second_tx
        .send(Err(SiteError::PartialTransport { path: "/second.html".into(), message: "offline".into() }))
        .unwrap();
    let report = block_on(load);

    assert_eq!(report, LoadReport { loaded: 1, failed: 1 });
    assert!(second.error.borrow().as_deref().is_some_and(|e| e.contains("offline")));
}
