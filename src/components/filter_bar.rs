//! Filter Bar
//!
//! Result count, sort select and the collapsible price/dietary panel.
//! These filters run client-side over the fetched items.

use leptos::prelude::*;
use menu_core::domain::{DietaryTag, PriceRange, SortKey};

use crate::context::use_app_context;

#[component]
pub fn FilterBar(
    /// Items left after client-side filtering
    #[prop(into)]
    visible_count: Signal<usize>,
    /// Items returned by the server
    #[prop(into)]
    total_count: Signal<usize>,
) -> impl IntoView {
    let filters = use_app_context().filters;
    let (panel_open, set_panel_open) = signal(false);
    let active_count = move || filters.with(|f| f.active_filter_count());

    let count_label = move || {
        let count = visible_count.get();
        let noun = if count == 1 { "item" } else { "items" };
        format!("{} {} found", count, noun)
    };

    let on_sort = move |ev: web_sys::Event| match event_target_value(&ev).parse::<SortKey>() {
        Ok(sort) => filters.update(|f| f.sort = sort),
        Err(e) => log::warn!("{}", e),
    };

    view! {
        <div class="filter-bar">
            <div class="filter-row">
                <span class="item-count">
                    {count_label}
                    <Show when=move || { visible_count.get() != total_count.get() }>
                        <span class="item-count-total">{move || format!(" of {}", total_count.get())}</span>
                    </Show>
                </span>
                <div class="filter-controls">
                    <button
                        class="filter-toggle"
                        class:active=move || { panel_open.get() || active_count() > 0 }
                        on:click=move |_| set_panel_open.update(|open| *open = !*open)
                    >
                        "Filters"
                        <Show when=move || { active_count() > 0 }>
                            <span class="badge">{active_count}</span>
                        </Show>
                    </button>
                    <select
                        class="sort-select"
                        prop:value=move || filters.with(|f| f.sort.as_str())
                        on:change=on_sort
                    >
                        {SortKey::ALL
                            .iter()
                            .map(|key| view! { <option value={key.as_str()}>{key.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <Show when=move || panel_open.get()>
                <div class="filter-panel">
                    <div class="filter-group">
                        <h4>"Price Range"</h4>
                        <div class="chip-row">
                            {PriceRange::ALL
                                .iter()
                                .copied()
                                .map(|range| view! {
                                    <button
                                        class="chip"
                                        class:active=move || filters.with(|f| f.price_range == range)
                                        on:click=move |_| filters.update(|f| f.price_range = range)
                                    >
                                        {range.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="filter-group">
                        <h4>"Dietary Preferences"</h4>
                        <div class="chip-row">
                            {DietaryTag::ALL
                                .iter()
                                .copied()
                                .map(|tag| view! {
                                    <button
                                        class="chip"
                                        class:active=move || filters.with(|f| f.dietary.contains(&tag))
                                        on:click=move |_| filters.update(|f| f.toggle_dietary(tag))
                                    >
                                        {tag.label()}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <Show when=move || filters.with(|f| f.has_active_filters())>
                        <button class="clear-filters" on:click=move |_| filters.update(|f| f.clear_filters())>
                            "Clear all filters"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
