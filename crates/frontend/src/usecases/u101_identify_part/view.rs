use contracts::usecases::u101_identify_part::{prettify_spec_key, IdentificationResult};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::api;
use super::state::{format_file_size, is_image_mime, UploadPhase, UploadSession};
use crate::shared::components::rating::RatingStars;
use crate::shared::components::ui::{Badge, Button};

#[derive(Clone, Copy, PartialEq)]
enum Method {
    Photo,
    Describe,
}

/// Part identification page: upload a photo, send it to the identification
/// service, render the structured result.
#[component]
pub fn IdentifyPage() -> impl IntoView {
    let (method, set_method) = signal(Method::Photo);

    view! {
        <div class="identify">
            <div class="method-switch">
                <button
                    class=move || method_btn_class(method.get(), Method::Photo)
                    on:click=move |_| set_method.set(Method::Photo)
                >
                    "Upload a photo"
                </button>
                <button
                    class=move || method_btn_class(method.get(), Method::Describe)
                    on:click=move |_| set_method.set(Method::Describe)
                >
                    "Describe the part"
                </button>
            </div>

            {move || match method.get() {
                Method::Photo => view! { <PhotoUpload /> }.into_any(),
                Method::Describe => view! { <DescribeMethod /> }.into_any(),
            }}
        </div>
    }
}

fn method_btn_class(current: Method, this: Method) -> &'static str {
    if current == this {
        "method-btn method-btn--active"
    } else {
        "method-btn"
    }
}

#[component]
fn PhotoUpload() -> impl IntoView {
    let session = RwSignal::new(UploadSession::default());
    // The File handle is not Send, keep it out of the session struct.
    let current_file = StoredValue::new_local(Option::<web_sys::File>::None);
    let (drag_over, set_drag_over) = signal(false);

    let handle_file = move |file: web_sys::File| {
        let mime = file.type_();
        if !is_image_mime(&mime) {
            session.update(|s| s.select_file(file.name(), file.size() as u64, &mime, String::new()));
            return;
        }
        let preview_url = match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => url,
            Err(e) => {
                log::error!("Failed to create preview URL: {e:?}");
                return;
            }
        };
        session.update(|s| s.select_file(file.name(), file.size() as u64, &mime, preview_url));
        current_file.set_value(Some(file));
    };

    let handle_input = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0)) {
            handle_file(file);
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(file);
        }
    };

    let reset = move || {
        current_file.set_value(None);
        let revoked = session.try_update(|s| s.reset()).flatten();
        if let Some(url) = revoked {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
    };

    let analyze = move |_| {
        if !session.with_untracked(|s| s.can_analyze()) {
            return;
        }
        session.update(|s| s.begin_analyze());
        leptos::task::spawn_local(async move {
            match api::identify_part(current_file.get_value()).await {
                Ok(result) => session.update(|s| s.finish(result)),
                Err(e) => {
                    log::error!("Identification failed: {e}");
                    session.update(|s| s.fail(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="photo-upload">
            {move || match session.with(|s| s.phase.clone()) {
                UploadPhase::Idle => {
                    view! {
                        <div
                            class=move || {
                                if drag_over.get() {
                                    "upload-zone upload-zone--drag-over"
                                } else {
                                    "upload-zone"
                                }
                            }
                            on:dragover=move |ev: web_sys::DragEvent| {
                                ev.prevent_default();
                                set_drag_over.set(true);
                            }
                            on:dragleave=move |_| set_drag_over.set(false)
                            on:drop=handle_drop
                        >
                            <p class="upload-zone__hint">
                                "Drag a part photo here, or choose a file"
                            </p>
                            <input
                                type="file"
                                accept="image/*"
                                class="upload-zone__input"
                                on:change=handle_input
                            />
                            {move || {
                                session
                                    .with(|s| s.rejection.clone())
                                    .map(|msg| {
                                        view! { <p class="upload-zone__rejection">{msg}</p> }
                                    })
                            }}
                        </div>
                    }
                        .into_any()
                }
                UploadPhase::Preview => {
                    view! {
                        <div class="preview-area">
                            <img
                                class="preview-area__image"
                                src=session.with(|s| s.preview_url.clone()).unwrap_or_default()
                            />
                            <p class="preview-area__caption">
                                {session.with(|s| s.file_name.clone()).unwrap_or_default()}
                                " ("
                                {format_file_size(session.with(|s| s.file_size))}
                                ")"
                            </p>
                            <div class="preview-area__actions">
                                <Button on_click=Callback::new(analyze)>"Analyze part"</Button>
                                <Button
                                    variant="secondary".to_string()
                                    on_click=Callback::new(move |_| reset())
                                >
                                    "Choose another"
                                </Button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                UploadPhase::Analyzing => {
                    view! {
                        <div class="analyzing">
                            <div class="spinner"></div>
                            <p>"Analyzing image..."</p>
                        </div>
                    }
                        .into_any()
                }
                UploadPhase::Done(result) => {
                    view! {
                        <ResultsView result=result on_reset=Callback::new(move |_| reset()) />
                    }
                        .into_any()
                }
                UploadPhase::Failed(message) => {
                    view! {
                        <div class="identify-error">
                            <h3>"Error"</h3>
                            <p>{message}</p>
                            <Button on_click=Callback::new(move |_| reset())>"Try again"</Button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ResultsView(result: IdentificationResult, on_reset: Callback<()>) -> impl IntoView {
    if !result.success {
        return view! {
            <div class="identify-error">
                <h3>"Error"</h3>
                <p>"Failed to identify part. Please try again."</p>
                <Button on_click=Callback::new(move |_| on_reset.run(()))>"Try again"</Button>
            </div>
        }
        .into_any();
    }

    let part = result.part.clone();
    let confidence = part.as_ref().map(|p| p.confidence).unwrap_or(0.0);
    let specs: Vec<(String, String)> = result
        .specifications
        .iter()
        .map(|(k, v)| (prettify_spec_key(k), v.clone()))
        .collect();

    view! {
        <div class="identify-results">
            <div class="results-header">
                <Badge variant="success".to_string()>"Part identified"</Badge>
                <div class="confidence">
                    <span class="confidence__score">
                        {format!("Confidence: {confidence:.1}%")}
                    </span>
                    <div class="confidence__bar">
                        <div
                            class="confidence__fill"
                            style=format!("width: {confidence}%")
                        ></div>
                    </div>
                </div>
                {result
                    .method
                    .clone()
                    .map(|method| view! { <span class="method-badge">{method}</span> })}
            </div>

            {part
                .map(|part| {
                    view! {
                        <div class="part-info">
                            <h3>{part.name}</h3>
                            <p>
                                <strong>"Detected as: "</strong>
                                {part.detected_type}
                            </p>
                            <p>
                                <strong>"Category: "</strong>
                                {part.category}
                            </p>
                        </div>
                    }
                })}

            <Show when={
                let has_specs = !specs.is_empty();
                move || has_specs
            }>
                <div class="specifications">
                    <h4>"Specifications"</h4>
                    <ul>
                        {specs
                            .clone()
                            .into_iter()
                            .map(|(key, value)| {
                                view! {
                                    <li>
                                        <strong>{key} ": "</strong>
                                        {value}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>

            {(!result.applications.is_empty())
                .then(|| {
                    view! {
                        <div class="applications">
                            <h4>"Applications"</h4>
                            <div class="applications__tags">
                                {result
                                    .applications
                                    .clone()
                                    .into_iter()
                                    .map(|app| view! { <span class="app-tag">{app}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}

            {result
                .pricing
                .clone()
                .map(|pricing| {
                    view! {
                        <div class="price-info">
                            <h4>"Price information"</h4>
                            <p>
                                <span class="price-info__label">"Estimated range: "</span>
                                {pricing.estimated_range}
                                " "
                                {pricing.currency}
                            </p>
                        </div>
                    }
                })}

            {(!result.vendors.is_empty())
                .then(|| {
                    view! {
                        <div class="vendors-section">
                            <h4>"Available vendors"</h4>
                            <div class="vendors-grid">
                                {result
                                    .vendors
                                    .clone()
                                    .into_iter()
                                    .map(|vendor| {
                                        view! {
                                            <div class="vendor-card">
                                                <h5>{vendor.name.clone()}</h5>
                                                <RatingStars rating=vendor.rating />
                                                <p class="vendor-card__location">{vendor.location}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}

            {result
                .note
                .clone()
                .map(|note| view! { <p class="identify-results__note">{note}</p> })}

            <Button
                variant="secondary".to_string()
                on_click=Callback::new(move |_| on_reset.run(()))
            >
                "Identify another part"
            </Button>
        </div>
    }
    .into_any()
}

#[component]
fn DescribeMethod() -> impl IntoView {
    let (description, set_description) = signal(String::new());
    let (submitted, set_submitted) = signal(false);

    view! {
        <div class="describe-method">
            <textarea
                class="describe-method__input"
                placeholder="Describe the part: markings, package, pin count..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <Button on_click=Callback::new(move |_| set_submitted.set(true))>
                "Search by description"
            </Button>
            <Show when=move || submitted.get()>
                <p class="describe-method__note">
                    "Description search is not available yet — try a photo instead."
                </p>
            </Show>
        </div>
    }
}
