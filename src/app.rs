//! Todo List Frontend App
//!
//! Root component: input row, list body and footer.

use leptos::prelude::*;

use crate::components::{LogPanel, NewTodoForm, TodoFooter, TodoListView};
use crate::config::TodoConfig;
use crate::context::AppContext;
use crate::controller::TodoApp;
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    // Storage is read before anything renders
    let app = TodoApp::load(BrowserStorage, &config);
    log::info!(
        "[APP] Starting with {} items under '{}'",
        app.list().len(),
        app.storage().key()
    );

    provide_context(AppContext::new(app));

    view! {
        <div class="todo-app">
            <h1>"Todo List"</h1>
            <NewTodoForm />
            <TodoListView />
            <TodoFooter />
            <LogPanel />
        </div>
    }
}
