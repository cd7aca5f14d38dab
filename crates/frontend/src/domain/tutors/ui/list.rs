use contracts::domain::category::Category;
use contracts::domain::tutor::{TutorProfile, TutorSearchParams};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{TutorCard, TutorFiltersPanel};
use crate::domain::categories::api as categories_api;
use crate::domain::tutors::api as tutors_api;
use crate::shared::request_guard::RequestGuard;

const PAGE_SIZE: usize = 9;

#[component]
pub fn TutorsPage() -> impl IntoView {
    let (tutors, set_tutors) = signal::<Vec<TutorProfile>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (page, set_page) = signal(0usize);
    let (filters, set_filters) = signal(TutorSearchParams::default());

    let guard = RequestGuard::new();

    // One-shot load of the category reference data for the filter panel.
    spawn_local(async move {
        match categories_api::fetch_categories().await {
            Ok(list) => set_categories.set(list),
            Err(e) => log::error!("Failed to fetch categories: {}", e),
        }
    });

    // Refetch whenever the filters change; a superseded response is dropped
    // instead of overwriting a newer one.
    Effect::new(move |_| {
        let params = filters.get();
        let generation = guard.begin();
        let task_guard = guard.clone();
        set_loading.set(true);
        spawn_local(async move {
            let result = tutors_api::fetch_tutors(&params).await;
            if !task_guard.is_current(generation) {
                return;
            }
            match result {
                Ok(list) => {
                    set_tutors.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to fetch tutors: {}", e);
                    set_tutors.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let total_pages = move || tutors.get().len().div_ceil(PAGE_SIZE).max(1);
    let paged = move || {
        tutors
            .get()
            .into_iter()
            .skip(page.get() * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect::<Vec<_>>()
    };

    let on_apply = Callback::new(move |params: TutorSearchParams| {
        set_page.set(0);
        set_filters.set(params);
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Find Your Perfect Tutor"</h1>
                    <p class="header__subtitle">
                        {move || {
                            format!(
                                "Browse through {} expert tutors and start learning today",
                                tutors.get().len(),
                            )
                        }}
                    </p>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="notice notice--error">{e}</div> })
            }}

            <div class="tutors-layout">
                <aside class="tutors-layout__filters">
                    <TutorFiltersPanel categories=categories on_apply=on_apply />
                </aside>

                <div class="tutors-layout__results">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="page-loading">"Loading..."</div> }
                    >
                        <Show
                            when=move || !tutors.get().is_empty()
                            fallback=|| {
                                view! {
                                    <div class="empty-state">
                                        <p>"No tutors found matching your criteria."</p>
                                        <p class="empty-state__hint">"Try adjusting your filters"</p>
                                    </div>
                                }
                            }
                        >
                            <div class="tutor-grid">
                                <For
                                    each=paged
                                    key=|tutor| tutor.id
                                    children=move |tutor| view! { <TutorCard tutor=tutor /> }
                                />
                            </div>

                            <Show when=move || { total_pages() > 1 }>
                                <div class="pager">
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                                        disabled=move || page.get() == 0
                                    >
                                        "Previous"
                                    </button>
                                    <span class="pager__info">
                                        {move || format!("Page {} of {}", page.get() + 1, total_pages())}
                                    </span>
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| set_page.update(|p| *p += 1)
                                        disabled=move || page.get() + 1 >= total_pages()
                                    >
                                        "Next"
                                    </button>
                                </div>
                            </Show>
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}
