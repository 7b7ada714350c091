//! Root component. Holds the current page and switches between them; pages
//! ask for navigation through the `on_navigate` callback they receive.

use crate::components::history::HistoryComponent;
use crate::components::home::HomeComponent;
use crate::components::offline_notice::OfflineNotice;
use crate::components::result::ResultComponent;
use crate::components::scan::ScanComponent;
use common::model::analysis::AnalysisResult;
use yew::{html, Callback, Component, Context, Html};

/// What the result page shows.
#[derive(Clone, PartialEq, Debug)]
pub struct ResultView {
    /// `None` when the page is reached without a diagnosis.
    pub result: Option<AnalysisResult>,
    /// Data URI of the analysed photo.
    pub image: String,
    /// Fresh analyses are written to history once; entries reopened from
    /// history are not written again.
    pub save_to_history: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Page {
    Home,
    Scan,
    Result(ResultView),
    History,
}

pub enum AppMsg {
    Navigate(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Home }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(page) => {
                self.page = page;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate: Callback<Page> = ctx.link().callback(AppMsg::Navigate);

        let page = match &self.page {
            Page::Home => html! { <HomeComponent {on_navigate} /> },
            Page::Scan => html! { <ScanComponent {on_navigate} /> },
            Page::Result(view) => html! {
                <ResultComponent view={view.clone()} {on_navigate} />
            },
            Page::History => html! { <HistoryComponent {on_navigate} /> },
        };

        html! {
            <>
                <OfflineNotice />
                { page }
            </>
        }
    }
}
