//! Todo Footer Component
//!
//! Remaining count, filters and clear-completed.

use leptos::prelude::*;

use crate::components::FilterBar;
use crate::context::AppContext;

#[component]
pub fn TodoFooter() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="todo-footer">
            <span id="items-left">{move || ctx.state.with(|app| app.items_left_label())}</span>
            <FilterBar />
            <button id="clear-completed" on:click=move |_| ctx.clear_completed()>
                "Clear completed"
            </button>
        </div>
    }
}
