//! Drag-and-drop upload widget with simulated progress.
//!
//! The render-relevant state lives in a [`UploadMachine`] behind a
//! Dioxus signal; this component wires browser events and timers to
//! the machine's event methods. Each accepted selection spawns one
//! async cycle task: decode the file, drive the progress ramp on a
//! fixed tick, wait out the redirect delay, then deliver the payload.
//! The machine's cycle tokens make any task belonging to a superseded
//! selection return early, so overlapping cycles can never both
//! complete.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdCloudUpload, LdImage};
use gloo_timers::future::TimeoutFuture;
use showroom_core::{SelectedFile, Tick, UploadConfig, UploadMachine, UploadPhase};

use crate::analytics;
use crate::auth::AuthContext;
use crate::decode;
use crate::i18n::I18n;

/// Props for the [`Upload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadProps {
    /// Called with the decoded data-URI, at most once per selection
    /// cycle, after the redirect delay elapses. When absent, cycles
    /// still run to completion with no observable effect.
    #[props(default)]
    on_complete: Option<EventHandler<String>>,
    /// Progress cadence and accepted extensions. Defaults to the
    /// reference cadence (100 ms tick, step 5, 600 ms delay).
    #[props(default)]
    config: Option<UploadConfig>,
}

/// Dropzone with a file picker, simulated progress bar, and deferred
/// completion callback.
///
/// Selection is gated by the shared [`AuthContext`]: while signed out
/// the file input is disabled and drops are silently ignored. Decode
/// failures surface an error line and log one console warning.
#[component]
pub fn Upload(props: UploadProps) -> Element {
    let i18n = use_context::<I18n>();
    let auth = use_context::<AuthContext>();
    let signed_in = auth.is_signed_in();

    let mut machine = use_signal({
        let config = props.config.clone().unwrap_or_default();
        move || UploadMachine::new(config)
    });

    let on_complete = props.on_complete;

    // One cycle: decode, ramp, delay, deliver. Shared by the
    // file-picker and drag-and-drop paths. Every step re-validates the
    // cycle token so a task whose selection was superseded stops
    // without side effects.
    let run_cycle = move |file: FileData| async move {
        let name = file.name();
        if !machine.peek().config().accepts(&name) {
            web_sys::console::warn_1(&format!("upload: unsupported file type: {name}").into());
            return;
        }

        let Some(cycle) = machine
            .write()
            .select(SelectedFile::from_name(name.clone()), signed_in)
        else {
            return;
        };

        match decode::read_data_uri(&file).await {
            Ok(uri) => {
                if !machine.write().decode_finished(cycle, uri) {
                    return;
                }
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("upload: {name}: {e}").into());
                machine.write().decode_failed(cycle);
                return;
            }
        }

        let interval = machine.peek().config().tick_interval_ms;
        let delay = machine.peek().config().redirect_delay_ms;

        loop {
            TimeoutFuture::new(interval).await;
            match machine.write().tick(cycle) {
                Tick::Advanced(_) => {}
                Tick::Finished => break,
                Tick::Stale => return,
            }
        }

        TimeoutFuture::new(delay).await;
        if let Some(payload) = machine.write().take_completion(cycle) {
            analytics::track_upload_complete();
            if let Some(handler) = on_complete {
                handler.call(payload);
            }
        }
    };

    let handle_change = move |evt: FormEvent| async move {
        if let Some(file) = evt.files().into_iter().next() {
            run_cycle(file).await;
        }
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        machine.write().drag_end();
        if let Some(file) = evt.files().into_iter().next() {
            run_cycle(file).await;
        }
    };

    let (phase, progress, filename, dragging, accept) = {
        let m = machine.read();
        (
            m.phase(),
            m.progress(),
            m.file().map(|f| f.name.clone()),
            m.is_dragging(),
            m.config().accept_attr(),
        )
    };

    let status_text = match phase {
        UploadPhase::Redirecting => i18n.t("hero-redirecting"),
        UploadPhase::Failed => i18n.t("hero-upload-failed"),
        _ => i18n.t("hero-analysing"),
    };
    let dropzone_label = if signed_in {
        i18n.t("hero-upload-active")
    } else {
        i18n.t("hero-upload-inactive")
    };
    let dropzone_class = if dragging {
        "dropzone is-dragging"
    } else {
        "dropzone"
    };

    rsx! {
        div { class: "upload",
            if let Some(name) = filename {
                div { class: "upload-status",
                    div { class: "status-content",
                        div { class: "status-icon",
                            if phase == UploadPhase::Redirecting {
                                span { class: "check", Icon { width: 24, height: 24, icon: LdCircleCheck } }
                            } else {
                                span { class: "image", Icon { width: 24, height: 24, icon: LdImage } }
                            }
                        }

                        h3 { "{name}" }

                        if phase == UploadPhase::Failed {
                            p { class: "status-text error", "{status_text}" }
                        } else {
                            div { class: "progress",
                                div { class: "bar", style: "width: {progress}%" }
                                p { class: "status-text", "{status_text}" }
                            }
                        }
                    }
                }
            } else {
                label {
                    class: "{dropzone_class}",
                    aria_label: "{dropzone_label}",
                    ondragover: move |evt| {
                        evt.prevent_default();
                        machine.write().drag_enter(signed_in);
                    },
                    ondragleave: move |_| {
                        machine.write().drag_end();
                    },
                    ondrop: handle_drop,

                    input {
                        r#type: "file",
                        class: "drop-input",
                        accept: "{accept}",
                        disabled: !signed_in,
                        onchange: handle_change,
                    }

                    div { class: "drop-content",
                        div { class: "drop-icon", Icon { width: 20, height: 20, icon: LdCloudUpload } }
                        p { "{dropzone_label}" }
                    }
                }
            }
        }
    }
}
