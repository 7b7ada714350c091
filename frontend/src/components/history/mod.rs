//! History page: the five most recent scans. Selecting one reopens it on the
//! result page without writing it to history again.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::scan::ScanRecord;

use crate::api::load_history;
use crate::app::{Page, ResultView};
use crate::helpers::format_scan_date;
use crate::theme::theme_for;

#[derive(Properties, PartialEq, Clone)]
pub struct HistoryProps {
    pub on_navigate: Callback<Page>,
}

pub enum Msg {
    Loaded(Vec<ScanRecord>),
    LoadFailed,
    Open(usize),
    Navigate(Page),
}

pub struct HistoryComponent {
    scans: Vec<ScanRecord>,
    loading: bool,
}

/// Result page for a stored scan.
pub fn reopen(record: &ScanRecord) -> Page {
    Page::Result(ResultView {
        result: Some(record.analysis()),
        image: record.image_data.clone(),
        save_to_history: false,
    })
}

impl Component for HistoryComponent {
    type Message = Msg;
    type Properties = HistoryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match load_history().await {
                Ok(scans) => link.send_message(Msg::Loaded(scans)),
                Err(e) => {
                    error!(format!("Error loading history: {}", e));
                    link.send_message(Msg::LoadFailed);
                }
            }
        });

        Self {
            scans: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(scans) => {
                self.scans = scans;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                true
            }
            Msg::Open(index) => {
                if let Some(record) = self.scans.get(index) {
                    ctx.props().on_navigate.emit(reopen(record));
                }
                false
            }
            Msg::Navigate(page) => {
                ctx.props().on_navigate.emit(page);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let body = if self.loading {
            html! { <p class="muted centered">{"Loading history..."}</p> }
        } else if self.scans.is_empty() {
            html! {
                <div class="centered empty">
                    <i class="material-icons large muted">{"calendar_today"}</i>
                    <p class="empty-title">{"No Scans Yet"}</p>
                    <p class="muted">{"Start scanning your crops to see the history here"}</p>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Navigate(Page::Scan))}>
                        {"Start Scanning"}
                    </button>
                </div>
            }
        } else {
            html! {
                <div class="history-list">
                    { for self.scans.iter().enumerate().map(|(index, scan)| build_entry(link, index, scan)) }
                </div>
            }
        };

        html! {
            <div class="page page-gradient">
                <header class="page-header">
                    <button class="icon-btn round" onclick={link.callback(|_| Msg::Navigate(Page::Home))}>
                        <i class="material-icons">{"arrow_back"}</i>
                    </button>
                    <h1 class="page-title">{"My Crop Health"}</h1>
                </header>
                <main class="page-main">{ body }</main>
            </div>
        }
    }
}

fn build_entry(link: &yew::html::Scope<HistoryComponent>, index: usize, scan: &ScanRecord) -> Html {
    let theme = theme_for(scan.severity);

    html! {
        <div key={scan.id.clone()} class="card clickable" onclick={link.callback(move |_| Msg::Open(index))}>
            <div class="history-entry">
                <img class="thumb" src={scan.image_data.clone()} alt={scan.disease.clone()} />
                <div class="history-text">
                    <div class="history-title">
                        <h3 style={format!("color:{};", theme.accent)}>{ scan.disease.clone() }</h3>
                        <i class="material-icons" style={format!("color:{};", theme.accent)}>{ theme.icon }</i>
                    </div>
                    <p class="muted clamp-2">{ scan.description.clone() }</p>
                    <div class="muted small">
                        <i class="material-icons tiny">{"calendar_today"}</i>
                        <span>{ format_scan_date(&scan.created_at) }</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use common::model::analysis::Severity;

    #[test]
    fn reopened_scan_keeps_steps_and_is_not_saved_again() {
        let record = ScanRecord {
            id: "a1".to_string(),
            disease: "Yellow Rust".to_string(),
            severity: Severity::Severe,
            description: "Stripes on most leaves.".to_string(),
            cure: vec!["Apply fungicide".to_string(), "Plant resistant varieties".to_string()],
            image_data: "data:image/jpeg;base64,/9j/".to_string(),
            created_at: chrono::Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap(),
        };

        match reopen(&record) {
            Page::Result(view) => {
                assert!(!view.save_to_history);
                assert_eq!(view.image, record.image_data);
                let result = view.result.unwrap();
                assert_eq!(result.severity, Severity::Severe);
                assert_eq!(result.cure.len(), 2);
            }
            other => panic!("unexpected page {:?}", other),
        }
    }
}
