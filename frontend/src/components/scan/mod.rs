//! Scan page: wiring the Yew `Component` implementation with submodules for
//! state, messages, update logic and view rendering.
//!
//! Flow: Idle → Capturing (file dialog open) → Encoding (reading the file
//! into a data URI) → Requesting (relay call in flight) → either the result
//! page or a toast and back to Idle.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::ScanProps;
pub use state::ScanComponent;

impl Component for ScanComponent {
    type Message = Msg;
    type Properties = ScanProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ScanComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
