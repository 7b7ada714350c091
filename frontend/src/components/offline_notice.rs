//! Banner shown while the browser reports no network connection.

use gloo_events::EventListener;
use yew::prelude::*;

pub enum Msg {
    Online,
    Offline,
}

pub struct OfflineNotice {
    online: bool,
    // Dropping a listener unregisters it.
    _listeners: Vec<EventListener>,
}

impl Component for OfflineNotice {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut listeners = Vec::new();
        let mut online = true;

        if let Some(window) = web_sys::window() {
            online = window.navigator().on_line();

            let on_online = ctx.link().callback(|_| Msg::Online);
            listeners.push(EventListener::new(&window, "online", move |_| {
                on_online.emit(())
            }));
            let on_offline = ctx.link().callback(|_| Msg::Offline);
            listeners.push(EventListener::new(&window, "offline", move |_| {
                on_offline.emit(())
            }));
        }

        Self {
            online,
            _listeners: listeners,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let online = matches!(msg, Msg::Online);
        let changed = self.online != online;
        self.online = online;
        changed
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.online {
            return html! {};
        }

        html! {
            <div class="offline-banner">
                <i class="material-icons">{"wifi_off"}</i>
                <span class="bold">{"No Internet Connection"}</span>
                <span class="small">{"• Scanning requires internet"}</span>
            </div>
        }
    }
}
