//! Todo List View Component
//!
//! Rebuilds every row from the current filtered view whenever state changes.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::view::ListView;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <ul id="todo-list" class="todo-list">
            {move || match ctx.state.with(|app| app.view()) {
                ListView::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! { <TodoRow row=row /> })
                    .collect_view()
                    .into_any(),
                ListView::Empty(message) => view! {
                    <li class="todo-empty" style="text-align: center; padding: 20px; color: #888;">
                        {message}
                    </li>
                }.into_any(),
            }}
        </ul>
    }
}
