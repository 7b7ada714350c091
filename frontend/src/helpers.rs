//! Small browser utilities shared by the pages.

use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 3000;

/// Shows a non-blocking notice at the bottom of the page. Styling comes from
/// the `.toast` rule in `index.html`; the element removes itself.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_class_name("toast");
    toast.set_attribute("role", "status").ok();
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(TOAST_MILLIS).await;
        toast.remove();
    });
}

/// Short date used in the history list, e.g. `16 Oct 2026`.
pub fn format_scan_date(at: &DateTime<Utc>) -> String {
    at.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn scan_dates_are_day_month_year() {
        let at = Utc.with_ymd_and_hms(2026, 10, 6, 14, 5, 0).unwrap();
        assert_eq!(format_scan_date(&at), "6 Oct 2026");
    }
}
