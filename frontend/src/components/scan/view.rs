//! View rendering for the scan page: preview area with a busy overlay, the
//! two capture buttons, photo tips, and the hidden file inputs they drive.

use super::messages::Msg;
use super::state::ScanComponent;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &ScanComponent, ctx: &Context<ScanComponent>) -> Html {
    let link = ctx.link();
    let busy = component.phase.is_busy();

    html! {
        <div class="page page-gradient">
            <header class="page-header">
                <button class="icon-btn round" onclick={link.callback(|_| Msg::Back)}>
                    <i class="material-icons">{"arrow_back"}</i>
                </button>
                <h1 class="page-title">{"Scan Your Crop"}</h1>
            </header>

            <main class="page-main">
                { build_preview(component, busy) }

                <div class="actions">
                    <button
                        class="btn btn-primary"
                        disabled={busy}
                        onclick={link.callback(|_| Msg::OpenCamera)}
                    >
                        <i class="material-icons">{"photo_camera"}</i>
                        {"Take Photo"}
                    </button>
                    <button
                        class="btn btn-outline"
                        disabled={busy}
                        onclick={link.callback(|_| Msg::OpenGallery)}
                    >
                        <i class="material-icons">{"upload"}</i>
                        {"Upload from Gallery"}
                    </button>
                </div>

                <div class="card">
                    <h3>{"Tips for Best Results:"}</h3>
                    <ul class="tips">
                        <li>{"• Take photo in good natural light"}</li>
                        <li>{"• Focus on affected leaf area"}</li>
                        <li>{"• Ensure image is clear and not blurry"}</li>
                        <li>{"• Include at least 2-3 leaves in frame"}</li>
                    </ul>
                </div>

                <input
                    ref={component.camera_input_ref.clone()}
                    type="file"
                    accept="image/*"
                    capture="environment"
                    style="display:none;"
                    onchange={file_callback(link)}
                />
                <input
                    ref={component.gallery_input_ref.clone()}
                    type="file"
                    accept="image/*"
                    style="display:none;"
                    onchange={file_callback(link)}
                />
            </main>
        </div>
    }
}

fn build_preview(component: &ScanComponent, busy: bool) -> Html {
    html! {
        <div class="preview">
            {
                if let Some(image) = &component.captured_image {
                    html! { <img src={image.clone()} alt="Captured crop" /> }
                } else {
                    html! {
                        <div class="preview-empty">
                            <i class="material-icons large">{"photo_camera"}</i>
                            <p>{"Take a photo or upload from gallery"}</p>
                        </div>
                    }
                }
            }
            {
                if busy {
                    html! {
                        <div class="preview-overlay">
                            <div class="spin"></div>
                            <p class="overlay-title">{"Analyzing your crop..."}</p>
                            <p class="overlay-hint">{"This may take a few moments"}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Reads the first selected file and clears the input so picking the same
/// photo again still fires `change`.
fn file_callback(link: &Scope<ScanComponent>) -> Callback<Event> {
    link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        input.set_value("");
        Msg::FileSelected(file)
    })
}
