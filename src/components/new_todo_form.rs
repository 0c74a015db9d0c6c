//! New Todo Form Component
//!
//! Text field plus Add button. Enter in the field submits the form.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        ctx.submit(&text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                id="todo-input"
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button id="add-btn" type="submit">"Add"</button>
        </form>
    }
}
