use super::*;
use leptos::*;
use overlay_core::next_overlay_id;

use crate::{
    runtime_context::use_overlay_runtime,
    session::{InitialFocus, OverlaySession, SessionOptions},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Dialog panel width presets.
pub enum DialogSize {
    /// Narrow confirmation panel.
    Small,
    /// Default panel width.
    Medium,
    /// Wide panel for dense content.
    Large,
}

impl Default for DialogSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl DialogSize {
    fn token(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }
}

#[component]
/// Modal dialog overlay.
///
/// While open it locks page scroll, traps Tab inside the panel, and hides
/// every background sibling from assistive technology. Escape closes it
/// and returns focus to the element focused at open time; clicks on the
/// backdrop do not dismiss it.
pub fn Dialog(
    /// Drives the overlay; the dialog renders only while true.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Invoked when the dialog asks to close; the caller flips `open`.
    on_close: Callback<()>,
    /// Panel DOM id; generated when omitted.
    #[prop(optional, into)]
    id: Option<String>,
    /// DOM id of the element that opens the dialog.
    #[prop(optional, into)]
    trigger_id: Option<String>,
    /// Panel width preset.
    #[prop(optional)]
    size: DialogSize,
    /// Accessible name for the panel.
    #[prop(optional, into)]
    aria_label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let runtime = use_overlay_runtime();
    view! {
        <Show when=move || runtime.portal_ready() && open.get() fallback=|| ()>
            {{
                let children = children.clone();
                view! {
                    <DialogSurface
                        on_close=on_close
                        id=id.clone()
                        trigger_id=trigger_id.clone()
                        size=size
                        aria_label=aria_label.clone()
                    >
                        {children()}
                    </DialogSurface>
                }
            }}
        </Show>
    }
}

#[component]
fn DialogSurface(
    on_close: Callback<()>,
    id: Option<String>,
    trigger_id: Option<String>,
    size: DialogSize,
    aria_label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let runtime = use_overlay_runtime();
    let overlay = next_overlay_id();
    let panel_id = id.unwrap_or_else(|| fallback_panel_id(overlay));

    let mut session = OverlaySession::new(
        runtime,
        SessionOptions {
            overlay,
            panel_id: panel_id.clone(),
            trigger_id,
            modal: true,
            initial_focus: InitialFocus::FirstElement,
            on_close,
        },
    );

    let panel = view! {
        <div class="ui-overlay-backdrop" data-ui-primitive="true" data-ui-kind="dialog-backdrop">
            <div
                class="ui-dialog"
                id=panel_id
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="dialog"
                data-ui-size=size.token()
            >
                {children()}
            </div>
        </div>
    };

    // Portal attach is synchronous, so the session sees the panel in the
    // live tree when it resolves the portal root.
    let out = view! { <Portal>{panel.clone()}</Portal> };
    session.open();
    on_cleanup(move || session.close());
    out
}
