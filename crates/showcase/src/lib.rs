//! Demonstration surface for the overlay primitive family.
//!
//! Renders a trigger row plus one overlay of each kind (dialog, drawer,
//! popover, menu, and a stacked dialog-over-dialog flow), so overlay
//! coordination can be reviewed in a real page without application state
//! behind it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod scene;

pub use scene::{current_scene, parse_scene_from_query, ShowcaseScene};

use leptos::*;
use overlay_runtime::prelude::*;

#[component]
/// Root showcase screen.
///
/// The startup scene from the page URL pre-opens one overlay; every
/// overlay is also reachable from its trigger button.
pub fn ShowcaseApp() -> impl IntoView {
    let scene = current_scene();
    let dialog_open = create_rw_signal(matches!(
        scene,
        ShowcaseScene::Dialog | ShowcaseScene::StackedDialogs
    ));
    let confirm_open = create_rw_signal(matches!(scene, ShowcaseScene::StackedDialogs));
    let drawer_open = create_rw_signal(matches!(scene, ShowcaseScene::Drawer));
    let popover_open = create_rw_signal(matches!(scene, ShowcaseScene::Popover));
    let menu_open = create_rw_signal(matches!(scene, ShowcaseScene::Menu));

    view! {
        <OverlayProvider>
            <main class="showcase" data-scene=scene.id()>
                <h1>"Overlay showcase"</h1>
                <section class="showcase-triggers">
                    <button id="open-profile-dialog" on:click=move |_| dialog_open.set(true)>
                        "Edit profile"
                    </button>
                    <button id="open-navigation-drawer" on:click=move |_| drawer_open.set(true)>
                        "Open navigation"
                    </button>
                    <button
                        id="open-share-popover"
                        aria-expanded=move || popover_open.get()
                        on:click=move |_| popover_open.set(!popover_open.get_untracked())
                    >
                        "Share"
                    </button>
                    <button
                        id="open-document-menu"
                        aria-haspopup="menu"
                        aria-expanded=move || menu_open.get()
                        on:click=move |_| menu_open.set(!menu_open.get_untracked())
                    >
                        "Document actions"
                    </button>
                </section>

                <Dialog
                    open=dialog_open
                    on_close=Callback::new(move |_| dialog_open.set(false))
                    id="profile-dialog"
                    trigger_id="open-profile-dialog"
                    aria_label="Edit profile"
                >
                    <label>
                        "Display name"
                        <input type="text" value="Sasha Ortiz" />
                    </label>
                    <label>
                        "Handle"
                        <input type="text" value="@sasha" />
                    </label>
                    <div class="showcase-actions">
                        <button on:click=move |_| dialog_open.set(false)>"Done"</button>
                        <button id="open-confirm-dialog" on:click=move |_| confirm_open.set(true)>
                            "Delete account..."
                        </button>
                    </div>
                </Dialog>

                <Dialog
                    open=confirm_open
                    on_close=Callback::new(move |_| confirm_open.set(false))
                    id="confirm-dialog"
                    trigger_id="open-confirm-dialog"
                    size=DialogSize::Small
                    aria_label="Confirm deletion"
                >
                    <p>"This removes the account and every draft it owns."</p>
                    <div class="showcase-actions">
                        <button on:click=move |_| confirm_open.set(false)>"Keep account"</button>
                        <button on:click=move |_| {
                            confirm_open.set(false);
                            dialog_open.set(false);
                        }>
                            "Delete"
                        </button>
                    </div>
                </Dialog>

                <Drawer
                    open=drawer_open
                    on_close=Callback::new(move |_| drawer_open.set(false))
                    id="navigation-drawer"
                    trigger_id="open-navigation-drawer"
                    side=DrawerSide::Right
                    aria_label="Navigation"
                >
                    <nav class="showcase-nav">
                        <button on:click=move |_| drawer_open.set(false)>"Inbox"</button>
                        <button on:click=move |_| drawer_open.set(false)>"Drafts"</button>
                        <button on:click=move |_| drawer_open.set(false)>"Archive"</button>
                    </nav>
                </Drawer>

                <Popover
                    open=popover_open
                    on_close=Callback::new(move |_| popover_open.set(false))
                    id="share-popover"
                    trigger_id="open-share-popover"
                    placement=PopoverPlacement::Bottom
                    aria_label="Share"
                >
                    <p>"Anyone with the link can view this document."</p>
                    <button on:click=move |_| popover_open.set(false)>"Copy link"</button>
                </Popover>

                <Menu
                    open=menu_open
                    on_close=Callback::new(move |_| menu_open.set(false))
                    id="document-menu"
                    trigger_id="open-document-menu"
                    aria_label="Document actions"
                >
                    <MenuItem on_click=Callback::new(move |_| menu_open.set(false))>
                        "Rename"
                    </MenuItem>
                    <MenuItem on_click=Callback::new(move |_| menu_open.set(false))>
                        "Duplicate"
                    </MenuItem>
                    <MenuItem disabled=true>"Publish"</MenuItem>
                    <MenuSeparator />
                    <MenuItem on_click=Callback::new(move |_| menu_open.set(false))>
                        "Delete"
                    </MenuItem>
                </Menu>
            </main>
        </OverlayProvider>
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the showcase application onto the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}
