use super::*;
use leptos::*;
use overlay_core::next_overlay_id;

use crate::{
    runtime_context::use_overlay_runtime,
    session::{InitialFocus, OverlaySession, SessionOptions},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Screen edge a [`Drawer`] slides in from.
pub enum DrawerSide {
    /// Anchored to the left edge.
    Left,
    /// Anchored to the right edge.
    Right,
}

impl Default for DrawerSide {
    fn default() -> Self {
        Self::Left
    }
}

impl DrawerSide {
    fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[component]
/// Edge-anchored panel with lightweight dismissal.
///
/// Unlike [`super::Dialog`] it takes no scroll lock and suppresses no
/// background content: the page stays interactive, and a pointer-down
/// outside the panel (and its trigger) closes it without returning focus.
/// Escape still closes it with focus restoration.
pub fn Drawer(
    /// Drives the overlay; the drawer renders only while true.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Invoked when the drawer asks to close; the caller flips `open`.
    on_close: Callback<()>,
    /// Panel DOM id; generated when omitted.
    #[prop(optional, into)]
    id: Option<String>,
    /// DOM id of the element that opens the drawer.
    #[prop(optional, into)]
    trigger_id: Option<String>,
    /// Edge the panel is anchored to.
    #[prop(optional)]
    side: DrawerSide,
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
                    <DrawerSurface
                        on_close=on_close
                        id=id.clone()
                        trigger_id=trigger_id.clone()
                        side=side
                        aria_label=aria_label.clone()
                    >
                        {children()}
                    </DrawerSurface>
                }
            }}
        </Show>
    }
}

#[component]
fn DrawerSurface(
    on_close: Callback<()>,
    id: Option<String>,
    trigger_id: Option<String>,
    side: DrawerSide,
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
            class="ui-drawer"
            id=panel_id
            role="dialog"
            tabindex="-1"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="drawer"
            data-ui-side=side.token()
        >
            {children()}
        </div>
    };

    let out = view! { <Portal>{panel.clone()}</Portal> };
    session.open();
    on_cleanup(move || session.close());
    out
}
