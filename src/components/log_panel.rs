//! Log Panel Component
//!
//! Collapsible view of the rolling logger's recent lines.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    // Re-read after every state change; handlers log before the signal notifies
    let lines = move || {
        ctx.state.track();
        rolling_logger::recent().join("\n")
    };

    view! {
        <details class="log-panel">
            <summary>"Log"</summary>
            <pre class="log-lines">{lines}</pre>
        </details>
    }
}
