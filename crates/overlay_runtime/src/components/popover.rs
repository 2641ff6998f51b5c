use super::*;
use leptos::*;
use overlay_core::next_overlay_id;

use crate::{
    runtime_context::use_overlay_runtime,
    session::{InitialFocus, OverlaySession, SessionOptions},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Panel position relative to a [`Popover`]'s trigger.
pub enum PopoverPlacement {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
    /// Before the trigger in reading direction.
    Start,
    /// After the trigger in reading direction.
    End,
}

impl Default for PopoverPlacement {
    fn default() -> Self {
        Self::Bottom
    }
}

impl PopoverPlacement {
    fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

#[component]
/// Anchored non-modal panel for supplementary content.
///
/// Dismissal is lightweight: Escape closes with focus restoration, an
/// outside pointer-down closes without it, and the page behind stays
/// fully interactive.
pub fn Popover(
    /// Drives the overlay; the popover renders only while true.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Invoked when the popover asks to close; the caller flips `open`.
    on_close: Callback<()>,
    /// Panel DOM id; generated when omitted.
    #[prop(optional, into)]
    id: Option<String>,
    /// DOM id of the element that opens the popover.
    #[prop(optional, into)]
    trigger_id: Option<String>,
    /// Side of the trigger the panel is placed on.
    #[prop(optional)]
    placement: PopoverPlacement,
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
                    <PopoverSurface
                        on_close=on_close
                        id=id.clone()
                        trigger_id=trigger_id.clone()
                        placement=placement
                        aria_label=aria_label.clone()
                    >
                        {children()}
                    </PopoverSurface>
                }
            }}
        </Show>
    }
}

#[component]
fn PopoverSurface(
    on_close: Callback<()>,
    id: Option<String>,
    trigger_id: Option<String>,
    placement: PopoverPlacement,
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
            modal: false,
            initial_focus: InitialFocus::FirstElement,
            on_close,
        },
    );

    let panel = view! {
        <div
            class="ui-popover"
            id=panel_id
            tabindex="-1"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="popover"
            data-ui-placement=placement.token()
        >
            {children()}
        </div>
    };

    let out = view! { <Portal>{panel.clone()}</Portal> };
    session.open();
    on_cleanup(move || session.close());
    out
}
