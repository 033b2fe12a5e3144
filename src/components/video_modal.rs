//! Video modal hosting the embedded player.

#[cfg(test)]
#[path = "video_modal_test.rs"]
mod video_modal_test;

use leptos::prelude::*;

use crate::app::PageHandle;
use crate::util::visual::{modal_style, to_inline};

/// Fullscreen modal; the player replaces the inner mount element.
#[component]
pub fn VideoModal() -> impl IntoView {
    let page = expect_context::<PageHandle>();
    let mount_id = page.player_mount_id();
    let style = move || to_inline(modal_style(page.view().state.modal_open));

    // Listen on the window: focus usually stays on the demo button that
    // opened the modal, or moves into the player iframe.
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if closes_on_key(&ev.key(), page.view_untracked().state.modal_open) {
            ev.prevent_default();
            page.close_video();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal" style=style on:click=move |_| page.close_video()>
            <div class="modal_content" on:click=move |ev| ev.stop_propagation()>
                <button class="modal_close" on:click=move |_| page.close_video() title="Close video">
                    "✕"
                </button>
                <div class="modal_player">
                    <div id=mount_id></div>
                </div>
            </div>
        </div>
    }
}

/// Escape closes the modal, and only while it is open.
fn closes_on_key(key: &str, modal_open: bool) -> bool {
    modal_open && key == "Escape"
}
