// Runtime smoke test (headless)
// - Builds a session and runs folio::app::run with FOLIO_TEST_HEADLESS=1 so no
//   raw TTY setup or restore happens.
// - The headless runtime returns immediately; it must return Ok(()) without panicking.

use std::time::Duration;

use folio::gallery::{ExtractedPage, ItemId, PageControls, ProjectRecord};
use folio::state::AppState;
use folio::theme::Settings;

#[tokio::test(flavor = "current_thread")]
async fn runtime_smoke_headless_returns_ok() {
    unsafe {
        std::env::set_var("FOLIO_TEST_HEADLESS", "1");
    }
    let page = ExtractedPage {
        title: None,
        records: vec![
            ProjectRecord::new(ItemId(0), "ux-ui", "figma", "Bank App", ""),
            ProjectRecord::new(ItemId(1), "graphic", "", "Cafe Logo", ""),
        ],
        controls: PageControls::default(),
    };
    let app = AppState::new(page, Settings::default()).expect("app state");

    let result = tokio::time::timeout(Duration::from_secs(2), folio::app::run(app)).await;
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("app::run returned error: {e:?}"),
        Err(_) => panic!("headless runtime did not return"),
    }
}
