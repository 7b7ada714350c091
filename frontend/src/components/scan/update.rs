//! Update function for the scan page.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render. Asynchronous work
//! (reading the file, calling the relay) runs in `spawn_local` and reports
//! back through the component link.

use gloo_console::error;
use gloo_file::futures::read_as_bytes;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::encoding::encode_data_uri;

use crate::api::{request_analysis, ScanFailure};
use crate::app::{Page, ResultView};
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::{ScanComponent, ScanPhase};

pub fn update(component: &mut ScanComponent, ctx: &Context<ScanComponent>, msg: Msg) -> bool {
    match msg {
        Msg::OpenCamera | Msg::OpenGallery if component.phase.is_busy() => false,
        Msg::OpenCamera => {
            let input_ref = component.camera_input_ref.clone();
            open_dialog(component, &input_ref);
            false
        }
        Msg::OpenGallery => {
            let input_ref = component.gallery_input_ref.clone();
            open_dialog(component, &input_ref);
            false
        }
        Msg::FileSelected(_) if component.phase.is_busy() => false,
        Msg::FileSelected(None) => {
            component.phase = ScanPhase::Idle;
            false
        }
        Msg::FileSelected(Some(raw)) => {
            component.phase = ScanPhase::Encoding;
            let link = ctx.link().clone();
            spawn_local(async move {
                let file = gloo_file::File::from(raw);
                let mime = file.raw_mime_type();
                match read_as_bytes(&file).await {
                    Ok(bytes) => link.send_message(Msg::Encoded(encode_data_uri(&mime, &bytes))),
                    Err(e) => {
                        error!(format!("Error reading selected file: {}", e));
                        link.send_message(Msg::AnalysisFailed(ScanFailure::Read));
                    }
                }
            });
            true
        }
        Msg::Encoded(image) => {
            component.captured_image = Some(image.clone());
            component.phase = ScanPhase::Requesting;
            let link = ctx.link().clone();
            spawn_local(async move {
                match request_analysis(image).await {
                    Ok(result) => link.send_message(Msg::AnalysisSucceeded(result)),
                    Err(failure) => link.send_message(Msg::AnalysisFailed(failure)),
                }
            });
            true
        }
        Msg::AnalysisSucceeded(result) => {
            component.phase = ScanPhase::Idle;
            let image = component.captured_image.clone().unwrap_or_default();
            ctx.props().on_navigate.emit(Page::Result(ResultView {
                result: Some(result),
                image,
                save_to_history: true,
            }));
            true
        }
        Msg::AnalysisFailed(failure) => {
            component.phase = ScanPhase::Idle;
            error!(format!("Analysis error: {:?}", failure));
            show_toast(failure.message());
            true
        }
        Msg::Back => {
            ctx.props().on_navigate.emit(Page::Home);
            false
        }
    }
}

fn open_dialog(component: &mut ScanComponent, input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
        component.phase = ScanPhase::Capturing;
        input.click();
    }
}
