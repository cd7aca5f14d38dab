use contracts::domain::category::Category;
use contracts::domain::tutor::TutorSearchParams;
use leptos::prelude::*;
use uuid::Uuid;

const RATE_FLOOR: u32 = 0;
const RATE_CEILING: u32 = 200;

/// Filter sidebar for the tutor listing. Local state only; the parent gets a
/// ready-to-send `TutorSearchParams` on apply or reset.
#[component]
pub fn TutorFiltersPanel(
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_apply: Callback<TutorSearchParams>,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let category_text = RwSignal::new(String::new());
    let min_rate = RwSignal::new(RATE_FLOOR);
    let max_rate = RwSignal::new(RATE_CEILING);

    let build = move || {
        let search_text = search.get().trim().to_string();
        TutorSearchParams {
            search: (!search_text.is_empty()).then_some(search_text),
            category_id: Uuid::parse_str(&category_text.get()).ok(),
            min_rate: (min_rate.get() > RATE_FLOOR).then(|| min_rate.get()),
            max_rate: (max_rate.get() < RATE_CEILING).then(|| max_rate.get()),
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_apply.run(build());
    };

    let on_reset = move |_| {
        search.set(String::new());
        category_text.set(String::new());
        min_rate.set(RATE_FLOOR);
        max_rate.set(RATE_CEILING);
        on_apply.run(TutorSearchParams::default());
    };

    view! {
        <form class="filter-panel" on:submit=on_submit>
            <div class="filter-panel__head">
                <h2 class="filter-panel__title">"Filters"</h2>
                <button type="button" class="button button--ghost" on:click=on_reset>
                    "Reset"
                </button>
            </div>

            <div class="form-group">
                <label for="filter-search">"Search"</label>
                <input
                    type="text"
                    id="filter-search"
                    placeholder="Name or subject..."
                    value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="filter-category">"Category"</label>
                <select
                    id="filter-category"
                    on:change=move |ev| category_text.set(event_target_value(&ev))
                >
                    <option value="">"All Categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <option value=category.id.to_string()>{category.name}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="form-group">
                <label>
                    "Hourly rate: "
                    {move || format!("${} - ${}", min_rate.get(), max_rate.get())}
                </label>
                <div class="filter-panel__range">
                    <input
                        type="number"
                        min=RATE_FLOOR
                        max=RATE_CEILING
                        step="10"
                        value=move || min_rate.get()
                        on:input=move |ev| {
                            min_rate.set(event_target_value(&ev).parse().unwrap_or(RATE_FLOOR))
                        }
                    />
                    <input
                        type="number"
                        min=RATE_FLOOR
                        max=RATE_CEILING
                        step="10"
                        value=move || max_rate.get()
                        on:input=move |ev| {
                            max_rate.set(event_target_value(&ev).parse().unwrap_or(RATE_CEILING))
                        }
                    />
                </div>
            </div>

            <button type="submit" class="button button--primary button--block">
                "Apply Filters"
            </button>
        </form>
    }
}
