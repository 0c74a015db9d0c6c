//! Filter Bar Component
//!
//! Three mutually exclusive filter buttons.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;
use crate::view::filter_button_class;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="filters">
            {Filter::ALL.into_iter().map(|filter| {
                let is_active = move || ctx.state.with(|app| app.filter() == filter);
                view! {
                    <button
                        class=move || filter_button_class(is_active())
                        data-filter=filter.as_str()
                        on:click=move |_| ctx.select_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
