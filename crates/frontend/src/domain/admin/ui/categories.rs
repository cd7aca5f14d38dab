use std::collections::BTreeMap;

use contracts::domain::category::Category;
use contracts::domain::user::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::categories::api as categories_api;
use crate::layout::shell::DashboardShell;

/// Category administration: add, rename inline, delete.
#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let new_name = RwSignal::new(String::new());
    // Per-row rename drafts keyed by category id.
    let (drafts, set_drafts) = signal::<BTreeMap<Uuid, String>>(BTreeMap::new());
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            match categories_api::fetch_categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            match categories_api::create_category(&name).await {
                Ok(_) => {
                    new_name.set(String::new());
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let rename = move |id: Uuid| {
        let name = drafts.with(|d| d.get(&id).cloned().unwrap_or_default());
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            match categories_api::update_category(id, &name).await {
                Ok(_) => {
                    set_drafts.update(|d| {
                        d.remove(&id);
                    });
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete = move |id: Uuid| {
        spawn_local(async move {
            match categories_api::delete_category(id).await {
                Ok(()) => set_reload.update(|n| *n += 1),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <DashboardShell role=UserRole::Admin>
            <div class="page">
                <h1>"Manage Categories"</h1>

                {move || {
                    error
                        .get()
                        .map(|e| view! { <div class="notice notice--error">{e}</div> })
                }}

                <form class="card filter-bar" on:submit=on_create>
                    <input
                        type="text"
                        placeholder="New category name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| new_name.set(event_target_value(&ev))
                    />
                    <button type="submit" class="button button--primary">
                        "Add Category"
                    </button>
                </form>

                <Show
                    when=move || !categories.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No categories yet"</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Rename"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || categories.get()
                                key=|category| category.id
                                children=move |category| {
                                    let id = category.id;
                                    view! {
                                        <tr>
                                            <td>{category.name.clone()}</td>
                                            <td>
                                                <div class="inline-edit">
                                                    <input
                                                        type="text"
                                                        placeholder=category.name.clone()
                                                        prop:value=move || {
                                                            drafts
                                                                .with(|d| d.get(&id).cloned().unwrap_or_default())
                                                        }
                                                        on:input=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            set_drafts.update(|d| {
                                                                d.insert(id, value);
                                                            });
                                                        }
                                                    />
                                                    <button
                                                        class="button button--secondary"
                                                        on:click=move |_| rename(id)
                                                    >
                                                        "Save"
                                                    </button>
                                                </div>
                                            </td>
                                            <td>
                                                <button
                                                    class="button button--danger"
                                                    on:click=move |_| delete(id)
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </DashboardShell>
    }
}
