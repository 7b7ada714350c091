//! Result page: the diagnosis themed by severity, numbered treatment steps,
//! optional speech playback, and the one-off history write for fresh scans.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::analysis::AnalysisResult;
use common::model::scan::NewScan;

use crate::api::save_scan;
use crate::app::{Page, ResultView};
use crate::helpers::show_toast;
use crate::theme::theme_for;

mod speech;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultProps {
    pub view: ResultView,
    pub on_navigate: Callback<Page>,
}

pub enum Msg {
    Speak,
    SpeechEnded,
    Navigate(Page),
}

pub struct ResultComponent {
    is_speaking: bool,
    saved: bool,
}

/// Treatment steps paired with their 1-based position.
pub fn numbered_steps(cure: &[String]) -> Vec<(usize, &str)> {
    cure.iter()
        .enumerate()
        .map(|(index, step)| (index + 1, step.as_str()))
        .collect()
}

impl Component for ResultComponent {
    type Message = Msg;
    type Properties = ResultProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            is_speaking: false,
            saved: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Speak => {
                let Some(result) = &ctx.props().view.result else {
                    return false;
                };
                if !speech::is_supported() {
                    show_toast("Voice playback not supported on this device");
                    return false;
                }
                let on_end = ctx.link().callback(|_| Msg::SpeechEnded);
                match speech::speak(&result.narration(), on_end) {
                    Ok(()) => {
                        self.is_speaking = true;
                        true
                    }
                    Err(e) => {
                        error!("Speech playback failed", e);
                        show_toast("Voice playback not supported on this device");
                        false
                    }
                }
            }
            Msg::SpeechEnded => {
                self.is_speaking = false;
                true
            }
            Msg::Navigate(page) => {
                ctx.props().on_navigate.emit(page);
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let view = &ctx.props().view;
        let Some(result) = &view.result else {
            ctx.props().on_navigate.emit(Page::Home);
            return;
        };
        if view.save_to_history && !self.saved {
            self.saved = true;
            let scan = NewScan {
                analysis: result.clone(),
                image_data: view.image.clone(),
            };
            spawn_local(async move {
                if let Err(e) = save_scan(&scan).await {
                    error!(format!("Error saving to history: {}", e));
                }
            });
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &ctx.props().view.result {
            Some(result) => self.build_page(ctx, result),
            None => html! {},
        }
    }
}

impl ResultComponent {
    fn build_page(&self, ctx: &Context<Self>, result: &AnalysisResult) -> Html {
        let link = ctx.link();
        let theme = theme_for(result.severity);
        let image = ctx.props().view.image.clone();

        html! {
            <div class="page theme-transition" style={format!("background:{};", theme.background)}>
                <header class="page-header" style={format!("background:{};", theme.header_background)}>
                    <button
                        class="icon-btn round"
                        style={format!("color:{};", theme.text)}
                        onclick={link.callback(|_| Msg::Navigate(Page::Home))}
                    >
                        <i class="material-icons">{"arrow_back"}</i>
                    </button>
                    <h1 class="page-title" style={format!("color:{};", theme.text)}>{"Analysis Result"}</h1>
                </header>

                <main class="page-main slide-up">
                    <div class="result-image" style={format!("box-shadow:{};", theme.glow)}>
                        <img src={image} alt="Analyzed crop" />
                    </div>

                    <div class="card borderless" style={format!("background:{};", theme.card_background)}>
                        <div class="status-row">
                            <i class="material-icons status-icon" style={format!("color:{};", theme.accent)}>
                                { theme.icon }
                            </i>
                            <div>
                                <h2 class="disease" style={format!("color:{};", theme.accent)}>
                                    { result.disease.clone() }
                                </h2>
                                <p class="status-label" style={format!("color:{};", theme.text)}>
                                    { result.status_label() }
                                </p>
                            </div>
                        </div>
                        <p class="description" style={format!("color:{};", theme.text)}>
                            { result.description.clone() }
                        </p>
                    </div>

                    { self.build_treatment(ctx, result) }

                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Navigate(Page::Scan))}>
                        <i class="material-icons">{"photo_camera"}</i>
                        {"Scan Again"}
                    </button>
                </main>
            </div>
        }
    }

    fn build_treatment(&self, ctx: &Context<Self>, result: &AnalysisResult) -> Html {
        if result.cure.is_empty() {
            return html! {};
        }
        let theme = theme_for(result.severity);

        html! {
            <div class="card borderless" style={format!("background:{};", theme.card_background)}>
                <div class="treatment-header">
                    <h3 style={format!("color:{};", theme.text)}>{"Treatment Steps"}</h3>
                    <button
                        class={classes!("icon-btn", "round", self.is_speaking.then_some("pulse"))}
                        disabled={self.is_speaking}
                        onclick={ctx.link().callback(|_| Msg::Speak)}
                    >
                        <i class="material-icons">{"volume_up"}</i>
                    </button>
                </div>
                <ul class="steps">
                    { for numbered_steps(&result.cure).into_iter().map(|(number, step)| html! {
                        <li key={number}>
                            <span class="step-number" style={format!("color:{};", theme.accent)}>
                                { number.to_string() }
                            </span>
                            <span style={format!("color:{};", theme.text)}>{ step.to_string() }</span>
                        </li>
                    }) }
                </ul>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::analysis::Severity;

    fn leaf_rust() -> AnalysisResult {
        AnalysisResult {
            disease: "Leaf Rust".to_string(),
            severity: Severity::Mild,
            description: "Orange-brown pustules on a few leaves.".to_string(),
            cure: vec![
                "Spray a triazole fungicide".to_string(),
                "Remove heavily infected leaves".to_string(),
                "Avoid excess nitrogen".to_string(),
                "Scout again in 7 days".to_string(),
            ],
        }
    }

    #[test]
    fn steps_are_numbered_from_one() {
        let result = leaf_rust();
        let steps = numbered_steps(&result.cure);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], (1, "Spray a triazole fungicide"));
        assert_eq!(steps[3], (4, "Scout again in 7 days"));
    }

    #[test]
    fn mild_result_gets_mild_theme() {
        let result = leaf_rust();
        let theme = theme_for(result.severity);
        assert_eq!(theme.icon, "warning");
        assert_eq!(result.status_label(), "mild Infection");
    }

    #[test]
    fn empty_cure_has_no_steps() {
        assert!(numbered_steps(&[]).is_empty());
    }
}
