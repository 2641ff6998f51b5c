use super::*;
use leptos::ev::MouseEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use overlay_core::{
    first_enabled, last_enabled, next_enabled, next_overlay_id, previous_enabled, typeahead_match,
    MenuItemView, TypeaheadBuffer, TYPEAHEAD_RESET,
};
use wasm_bindgen::JsCast;

use crate::{
    dom,
    runtime_context::use_overlay_runtime,
    session::{InitialFocus, OverlaySession, SessionOptions},
};

const MENU_ITEM_SELECTOR: &str =
    r#"[role="menuitem"], [role="menuitemcheckbox"], [role="menuitemradio"]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Menu panel width presets.
pub enum MenuWidth {
    /// Narrow panel for short action lists.
    Compact,
    /// Default panel width.
    Standard,
    /// Wide panel for labelled shortcuts.
    Wide,
}

impl Default for MenuWidth {
    fn default() -> Self {
        Self::Standard
    }
}

impl MenuWidth {
    fn token(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Wide => "wide",
        }
    }
}

#[component]
/// Anchored action-list overlay with roving keyboard selection.
///
/// Arrow keys move between enabled items and clamp at the ends; Home and
/// End jump to the first and last enabled item; printable keys accumulate
/// into a typeahead prefix that jumps to the first matching enabled item.
/// The panel itself takes initial focus, so navigation starts with no
/// item selected. Dismissal is lightweight, as for [`super::Popover`].
pub fn Menu(
    /// Drives the overlay; the menu renders only while true.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Invoked when the menu asks to close; the caller flips `open`.
    on_close: Callback<()>,
    /// Panel DOM id; generated when omitted.
    #[prop(optional, into)]
    id: Option<String>,
    /// DOM id of the element that opens the menu; also labels the panel
    /// when no `aria_label` is given.
    #[prop(optional, into)]
    trigger_id: Option<String>,
    /// Panel width preset.
    #[prop(optional)]
    width: MenuWidth,
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
                    <MenuSurface
                        on_close=on_close
                        id=id.clone()
                        trigger_id=trigger_id.clone()
                        width=width
                        aria_label=aria_label.clone()
                    >
                        {children()}
                    </MenuSurface>
                }
            }}
        </Show>
    }
}

#[component]
fn MenuSurface(
    on_close: Callback<()>,
    id: Option<String>,
    trigger_id: Option<String>,
    width: MenuWidth,
    aria_label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let runtime = use_overlay_runtime();
    let overlay = next_overlay_id();
    let panel_id = id.unwrap_or_else(|| fallback_panel_id(overlay));
    let labelled_by = if aria_label.is_none() {
        trigger_id.clone()
    } else {
        None
    };

    let typeahead = store_value(TypeaheadBuffer::new());
    let reset_timer = store_value(None::<TimeoutHandle>);

    let mut session = OverlaySession::new(
        runtime,
        SessionOptions {
            overlay,
            panel_id: panel_id.clone(),
            trigger_id,
            modal: false,
            initial_focus: InitialFocus::Container,
            on_close,
        },
    );

    let keydown_id = panel_id.clone();
    let panel = view! {
        <div
            class="ui-menu"
            id=panel_id
            role="menu"
            tabindex="-1"
            aria-label=aria_label
            aria-labelledby=labelled_by
            data-ui-primitive="true"
            data-ui-kind="menu"
            data-ui-width=width.token()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                handle_menu_keydown(&ev, &keydown_id, typeahead, reset_timer);
            }
        >
            {children()}
        </div>
    };

    let out = view! { <Portal>{panel.clone()}</Portal> };
    session.open();
    on_cleanup(move || {
        clear_typeahead(typeahead, reset_timer);
        session.close();
    });
    out
}

#[component]
/// One activatable entry inside a [`Menu`].
pub fn MenuItem(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-menu-item"
            id=id
            role="menuitem"
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            on:click:undelegated=move |ev| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Non-interactive divider between menu item groups.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <div
            class="ui-menu-separator"
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

/// Handles roving arrow/home/end navigation and typeahead for an open
/// menu, preventing default when a key is consumed.
fn handle_menu_keydown(
    ev: &web_sys::KeyboardEvent,
    menu_id: &str,
    typeahead: StoredValue<TypeaheadBuffer>,
    reset_timer: StoredValue<Option<TimeoutHandle>>,
) {
    let handled = match ev.key().as_str() {
        "ArrowDown" => {
            clear_typeahead(typeahead, reset_timer);
            move_menu_selection(menu_id, next_enabled)
        }
        "ArrowUp" => {
            clear_typeahead(typeahead, reset_timer);
            move_menu_selection(menu_id, previous_enabled)
        }
        "Home" => {
            clear_typeahead(typeahead, reset_timer);
            move_menu_selection(menu_id, |items, _| first_enabled(items))
        }
        "End" => {
            clear_typeahead(typeahead, reset_timer);
            move_menu_selection(menu_id, |items, _| last_enabled(items))
        }
        key => try_menu_typeahead(menu_id, key, ev, typeahead, reset_timer),
    };

    if handled {
        ev.prevent_default();
        ev.stop_propagation();
    }
}

/// Moves focus to the item `choose` picks from the current item list.
/// Navigation keys are consumed even when the selection clamps in place.
fn move_menu_selection(
    menu_id: &str,
    choose: impl Fn(&[MenuItemView], Option<usize>) -> Option<usize>,
) -> bool {
    let items = menu_item_elements(menu_id);
    let views = menu_item_views(&items);
    let active = active_menu_index(&items);
    if let Some(index) = choose(&views, active) {
        if let Some(item) = items.get(index) {
            dom::focus_html_element(item);
        }
    }
    true
}

fn try_menu_typeahead(
    menu_id: &str,
    key: &str,
    ev: &web_sys::KeyboardEvent,
    typeahead: StoredValue<TypeaheadBuffer>,
    reset_timer: StoredValue<Option<TimeoutHandle>>,
) -> bool {
    // Chorded keys are shortcuts, not typed text.
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return false;
    }
    let consumed = typeahead
        .try_update_value(|buffer| buffer.push_key(key))
        .unwrap_or(false);
    if !consumed {
        return false;
    }

    schedule_typeahead_reset(typeahead, reset_timer);

    let prefix = typeahead.with_value(|buffer| buffer.as_str().to_string());
    let items = menu_item_elements(menu_id);
    let views = menu_item_views(&items);
    if let Some(index) = typeahead_match(&views, &prefix) {
        if let Some(item) = items.get(index) {
            dom::focus_html_element(item);
        }
    }
    true
}

fn schedule_typeahead_reset(
    typeahead: StoredValue<TypeaheadBuffer>,
    reset_timer: StoredValue<Option<TimeoutHandle>>,
) {
    clear_reset_timer(reset_timer);
    let scheduled = set_timeout_with_handle(
        move || {
            let _ = typeahead.try_update_value(|buffer| buffer.clear());
            let _ = reset_timer.try_update_value(|timer| *timer = None);
        },
        TYPEAHEAD_RESET,
    );
    match scheduled {
        Ok(handle) => reset_timer.update_value(|timer| *timer = Some(handle)),
        Err(err) => logging::warn!("typeahead reset timer failed: {err:?}"),
    }
}

fn clear_typeahead(
    typeahead: StoredValue<TypeaheadBuffer>,
    reset_timer: StoredValue<Option<TimeoutHandle>>,
) {
    clear_reset_timer(reset_timer);
    typeahead.update_value(|buffer| buffer.clear());
}

fn clear_reset_timer(reset_timer: StoredValue<Option<TimeoutHandle>>) {
    reset_timer.update_value(|timer| {
        if let Some(handle) = timer.take() {
            handle.clear();
        }
    });
}

/// All menu items in the panel, disabled ones included, in DOM order.
fn menu_item_elements(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(menu) = dom::element_by_id(menu_id) else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(MENU_ITEM_SELECTOR) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(item) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        items.push(item);
    }
    items
}

fn menu_item_views(items: &[web_sys::HtmlElement]) -> Vec<MenuItemView> {
    items
        .iter()
        .map(|item| MenuItemView {
            label: item.text_content().unwrap_or_default().trim().to_string(),
            enabled: !item.has_attribute("disabled")
                && item.get_attribute("aria-disabled").as_deref() != Some("true"),
        })
        .collect()
}

fn active_menu_index(items: &[web_sys::HtmlElement]) -> Option<usize> {
    let active = dom::active_html_element()?;
    items.iter().position(|item| *item == active)
}
