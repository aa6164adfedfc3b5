use leptos::prelude::*;

use crate::filter::{filter_options, Filter};

#[component]
pub fn FilterBar(
    filter: ReadSignal<Filter>,
    #[prop(into)] on_filter_change: Callback<Filter>,
) -> impl IntoView {
    view! {
        <div class="filter-bar" role="group" aria-label="Filter projects by category">
            {filter_options()
                .into_iter()
                .map(|opt| {
                    let is_active = {
                        let opt = opt.clone();
                        Memo::new(move |_| filter.with(|current| opt.is_active(current)))
                    };
                    let selected = opt.filter.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if is_active.get() { "filter-btn active" } else { "filter-btn" }
                            aria-pressed=move || is_active.get().to_string()
                            data-filter=opt.filter.value().to_string()
                            on:click=move |_| on_filter_change.run(selected.clone())
                        >
                            {opt.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
