//! Diary page: list, write, edit, and delete dated entries.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::guards::PermissionGuard;
use crate::components::header::AppHeader;
use crate::net::types::{Action, DiaryEntry, Permission, Resource};
use crate::pages::notes::ConfirmDeleteDialog;
use crate::state::diary::DiaryState;
use crate::util::auth::{install_unauth_redirect, use_session};

fn load_entries(diary: RwSignal<DiaryState>) {
    diary.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_diary::list_entries().await {
            Ok(items) => diary.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(message) => diary.update(|s| {
                s.loading = false;
                s.error = Some(message);
            }),
        }
    });
}

#[component]
pub fn DiaryPage() -> impl IntoView {
    let session = use_session();
    let diary = expect_context::<RwSignal<DiaryState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() || !session.get().is_authenticated() {
            return;
        }
        loaded.set(true);
        load_entries(diary);
    });

    let show_create = RwSignal::new(false);
    let edit_entry = RwSignal::new(None::<DiaryEntry>);
    let delete_entry_id = RwSignal::new(None::<String>);

    let on_create_cancel = Callback::new(move |_| show_create.set(false));
    let on_edit_cancel = Callback::new(move |_| edit_entry.set(None));
    let on_delete_cancel = Callback::new(move |_| delete_entry_id.set(None));

    let on_create_submit = Callback::new(move |draft: DiaryDraft| {
        show_create.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let date = (!draft.entry_date.is_empty()).then_some(draft.entry_date);
            let mood = (!draft.mood.is_empty()).then_some(draft.mood);
            match crate::net::api_diary::create_entry(
                &draft.title,
                &draft.content,
                date.as_deref(),
                mood.as_deref(),
            )
            .await
            {
                Ok(entry) => diary.update(|s| s.items.insert(0, entry)),
                Err(message) => diary.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    });

    let on_edit_submit = Callback::new(move |draft: DiaryDraft| {
        let Some(entry) = edit_entry.get_untracked() else {
            return;
        };
        edit_entry.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let next = DiaryEntry {
                id: entry.id.clone(),
                title: draft.title,
                content: draft.content,
                entry_date: (!draft.entry_date.is_empty()).then_some(draft.entry_date),
                mood: (!draft.mood.is_empty()).then_some(draft.mood),
            };
            match crate::net::api_diary::update_entry(&entry.id, &next).await {
                Ok(updated) => diary.update(|s| {
                    if let Some(slot) = s.items.iter_mut().find(|e| e.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(message) => diary.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (entry, draft);
        }
    });

    let on_delete_confirm = Callback::new(move |_| {
        let Some(id) = delete_entry_id.get_untracked() else {
            return;
        };
        delete_entry_id.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_diary::delete_entry(&id).await {
                Ok(()) => diary.update(|s| s.items.retain(|e| e.id != id)),
                Err(message) => diary.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="entity-page">
            <AppHeader/>

            <div class="entity-page__body">
                <div class="entity-page__heading">
                    <h1>"Diary"</h1>
                    <PermissionGuard permission=Permission::new(Resource::Diary, Action::Create)>
                        <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                            "+ New Entry"
                        </button>
                    </PermissionGuard>
                </div>

                <Show when=move || diary.get().error.is_some()>
                    <p class="entity-page__error">{move || diary.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !diary.get().loading
                    fallback=move || view! { <p>"Loading entries..."</p> }
                >
                    <Show
                        when=move || !diary.get().items.is_empty()
                        fallback=move || {
                            view! { <p class="entity-page__empty">"No entries yet."</p> }
                        }
                    >
                        <ul class="entity-list">
                            {move || {
                                diary
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|entry| {
                                        let edit_target = entry.clone();
                                        let delete_id = entry.id.clone();
                                        view! {
                                            <li class="entity-list__item">
                                                <div class="entity-list__text">
                                                    <h3>
                                                        {entry.title.clone()}
                                                        <span class="entity-list__meta">
                                                            {entry
                                                                .entry_date
                                                                .clone()
                                                                .map(|d| format!(" — {d}"))
                                                                .unwrap_or_default()}
                                                            {entry
                                                                .mood
                                                                .clone()
                                                                .map(|m| format!(" ({m})"))
                                                                .unwrap_or_default()}
                                                        </span>
                                                    </h3>
                                                    <p>{entry.content.clone()}</p>
                                                </div>
                                                <div class="entity-list__actions">
                                                    <PermissionGuard permission=Permission::new(
                                                        Resource::Diary,
                                                        Action::Update,
                                                    )>
                                                        {
                                                            let edit_target = edit_target.clone();
                                                            view! {
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| edit_entry.set(Some(edit_target.clone()))
                                                                >
                                                                    "Edit"
                                                                </button>
                                                            }
                                                        }
                                                    </PermissionGuard>
                                                    <PermissionGuard permission=Permission::new(
                                                        Resource::Diary,
                                                        Action::Delete,
                                                    )>
                                                        {
                                                            let delete_id = delete_id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| delete_entry_id.set(Some(delete_id.clone()))
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            }
                                                        }
                                                    </PermissionGuard>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </div>

            <Show when=move || show_create.get()>
                <DiaryDialog
                    heading="New Entry"
                    initial=DiaryDraft::default()
                    on_cancel=on_create_cancel
                    on_submit=on_create_submit
                />
            </Show>
            <Show when=move || edit_entry.get().is_some()>
                {move || {
                    let initial = edit_entry.get().map(DiaryDraft::from_entry).unwrap_or_default();
                    view! {
                        <DiaryDialog
                            heading="Edit Entry"
                            initial=initial
                            on_cancel=on_edit_cancel
                            on_submit=on_edit_submit
                        />
                    }
                }}
            </Show>
            <Show when=move || delete_entry_id.get().is_some()>
                <ConfirmDeleteDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
            </Show>
        </div>
    }
}

/// Editable diary fields passed between the dialog and the page handlers.
#[derive(Clone, Debug, Default)]
struct DiaryDraft {
    title: String,
    content: String,
    entry_date: String,
    mood: String,
}

impl DiaryDraft {
    fn from_entry(entry: DiaryEntry) -> Self {
        Self {
            title: entry.title,
            content: entry.content,
            entry_date: entry.entry_date.unwrap_or_default(),
            mood: entry.mood.unwrap_or_default(),
        }
    }
}

/// Modal dialog shared by diary create and edit flows.
#[component]
fn DiaryDialog(
    heading: &'static str,
    initial: DiaryDraft,
    on_cancel: Callback<()>,
    on_submit: Callback<DiaryDraft>,
) -> impl IntoView {
    let title = RwSignal::new(initial.title);
    let content = RwSignal::new(initial.content);
    let entry_date = RwSignal::new(initial.entry_date);
    let mood = RwSignal::new(initial.mood);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let title_value = title.get();
        if title_value.trim().is_empty() {
            info.set("Enter a title first.".to_owned());
            return;
        }
        on_submit.run(DiaryDraft {
            title: title_value.trim().to_owned(),
            content: content.get(),
            entry_date: entry_date.get(),
            mood: mood.get(),
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Entry"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || entry_date.get()
                        on:input=move |ev| entry_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Mood"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="optional"
                        prop:value=move || mood.get()
                        on:input=move |ev| mood.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__message">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
