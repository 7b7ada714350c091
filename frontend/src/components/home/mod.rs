//! Landing page with a local English/Hindi toggle.

use crate::app::Page;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }

    /// Label of the toggle button: the language it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::English => "हिं",
            Language::Hindi => "EN",
        }
    }

    pub fn text(self) -> &'static HomeText {
        match self {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
        }
    }
}

pub struct HomeText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub scan: &'static str,
    pub history: &'static str,
    pub description: &'static str,
}

static ENGLISH: HomeText = HomeText {
    title: "WheatSure",
    subtitle: "AI-Powered Crop Disease Detection",
    scan: "Scan Crop",
    history: "My Crop Health",
    description: "Take a photo of your wheat crop to instantly detect diseases and get treatment recommendations",
};

static HINDI: HomeText = HomeText {
    title: "वीटशोर",
    subtitle: "एआई से फसल रोग पहचान",
    scan: "फसल स्कैन करें",
    history: "मेरी फसल स्वास्थ्य",
    description: "अपनी गेहूं की फसल की फोटो लें और तुरंत रोग की पहचान और उपचार प्राप्त करें",
};

#[derive(Properties, PartialEq, Clone)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
}

pub enum Msg {
    ToggleLanguage,
    Navigate(Page),
}

pub struct HomeComponent {
    language: Language,
}

impl Component for HomeComponent {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            language: Language::English,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleLanguage => {
                self.language = self.language.toggled();
                true
            }
            Msg::Navigate(page) => {
                ctx.props().on_navigate.emit(page);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let text = self.language.text();

        html! {
            <div class="page page-gradient home">
                <header class="page-header spread">
                    <div class="brand">
                        <i class="material-icons logo">{"grass"}</i>
                        <h1 class="page-title">{ text.title }</h1>
                    </div>
                    <button class="btn-small round" onclick={link.callback(|_| Msg::ToggleLanguage)}>
                        { self.language.toggle_label() }
                    </button>
                </header>

                <main class="home-main slide-up">
                    <div class="hero-logo pulse-glow">
                        <i class="material-icons hero-icon">{"grass"}</i>
                    </div>
                    <h2 class="hero-title">{ text.title }</h2>
                    <p class="muted hero-subtitle">{ text.subtitle }</p>
                    <p class="muted">{ text.description }</p>

                    <div class="actions">
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::Navigate(Page::Scan))}>
                            <i class="material-icons">{"photo_camera"}</i>
                            { text.scan }
                        </button>
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::Navigate(Page::History))}>
                            <i class="material-icons">{"history"}</i>
                            { text.history }
                        </button>
                    </div>
                </main>

                <footer class="muted small centered">
                    <p>{"Powered by AI • Made for Farmers"}</p>
                </footer>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_languages() {
        assert_eq!(Language::English.toggled(), Language::Hindi);
        assert_eq!(Language::Hindi.toggled().toggled(), Language::Hindi);
        assert_eq!(Language::English.toggle_label(), "हिं");
        assert_eq!(Language::Hindi.text().title, "वीटशोर");
        assert_eq!(Language::English.text().scan, "Scan Crop");
    }
}
