//! Todo Row Component
//!
//! A single item in the list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::view::RowView;

/// Row controls act on the row's position in the filtered view
#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let text_class = row.text_class();
    let RowView { filtered_index, id, text, completed } = row;

    view! {
        <li class="todo-item" data-id=id.0.to_string()>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=completed
                on:change=move |_| ctx.toggle(filtered_index)
            />
            <span class=text_class>{text}</span>
            <button class="delete-btn" on:click=move |_| ctx.delete(filtered_index)>
                "Delete"
            </button>
        </li>
    }
}
