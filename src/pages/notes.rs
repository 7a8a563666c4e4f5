//! Notes page: list, create, edit, and delete notes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mutating controls are gated by the viewer's grants, so a read-only session
//! (e.g. a guest) sees the list without any write affordances. API errors
//! land in a page banner; they never unmount the list.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::guards::PermissionGuard;
use crate::components::header::AppHeader;
use crate::net::types::{Action, Note, Permission, Resource};
use crate::state::notes::NotesState;
use crate::util::auth::{install_unauth_redirect, use_session};

/// Validate the note form. Returns the trimmed title.
fn validate_note_input(title: &str) -> Result<String, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Enter a title first.");
    }
    Ok(title.to_owned())
}

fn load_notes(notes: RwSignal<NotesState>) {
    notes.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_notes::list_notes().await {
            Ok(items) => notes.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(message) => notes.update(|s| {
                s.loading = false;
                s.error = Some(message);
            }),
        }
    });
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let session = use_session();
    let notes = expect_context::<RwSignal<NotesState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() || !session.get().is_authenticated() {
            return;
        }
        loaded.set(true);
        load_notes(notes);
    });

    let show_create = RwSignal::new(false);
    let edit_note = RwSignal::new(None::<Note>);
    let delete_note_id = RwSignal::new(None::<String>);

    let on_create_cancel = Callback::new(move |_| show_create.set(false));
    let on_edit_cancel = Callback::new(move |_| edit_note.set(None));
    let on_delete_cancel = Callback::new(move |_| delete_note_id.set(None));

    let on_create_submit = Callback::new(move |(title, content): (String, String)| {
        show_create.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_notes::create_note(&title, &content).await {
                Ok(note) => notes.update(|s| s.items.insert(0, note)),
                Err(message) => notes.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, content);
        }
    });

    let on_edit_submit = Callback::new(move |(title, content): (String, String)| {
        let Some(note) = edit_note.get_untracked() else {
            return;
        };
        edit_note.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_notes::update_note(&note.id, &title, &content).await {
                Ok(updated) => notes.update(|s| {
                    if let Some(slot) = s.items.iter_mut().find(|n| n.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(message) => notes.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (note, title, content);
        }
    });

    let on_delete_confirm = Callback::new(move |_| {
        let Some(id) = delete_note_id.get_untracked() else {
            return;
        };
        delete_note_id.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_notes::delete_note(&id).await {
                Ok(()) => notes.update(|s| s.items.retain(|n| n.id != id)),
                Err(message) => notes.update(|s| s.error = Some(message)),
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
                    <h1>"Notes"</h1>
                    <PermissionGuard permission=Permission::new(Resource::Note, Action::Create)>
                        <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                            "+ New Note"
                        </button>
                    </PermissionGuard>
                </div>

                <Show when=move || notes.get().error.is_some()>
                    <p class="entity-page__error">{move || notes.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !notes.get().loading
                    fallback=move || view! { <p>"Loading notes..."</p> }
                >
                    <Show
                        when=move || !notes.get().items.is_empty()
                        fallback=move || view! { <p class="entity-page__empty">"No notes yet."</p> }
                    >
                        <ul class="entity-list">
                            {move || {
                                notes
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|note| {
                                        let edit_target = note.clone();
                                        let delete_id = note.id.clone();
                                        view! {
                                            <li class="entity-list__item">
                                                <div class="entity-list__text">
                                                    <h3>{note.title.clone()}</h3>
                                                    <p>{note.content.clone()}</p>
                                                </div>
                                                <div class="entity-list__actions">
                                                    <PermissionGuard permission=Permission::new(
                                                        Resource::Note,
                                                        Action::Update,
                                                    )>
                                                        {
                                                            let edit_target = edit_target.clone();
                                                            view! {
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| edit_note.set(Some(edit_target.clone()))
                                                                >
                                                                    "Edit"
                                                                </button>
                                                            }
                                                        }
                                                    </PermissionGuard>
                                                    <PermissionGuard permission=Permission::new(
                                                        Resource::Note,
                                                        Action::Delete,
                                                    )>
                                                        {
                                                            let delete_id = delete_id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| delete_note_id.set(Some(delete_id.clone()))
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
                <NoteDialog
                    heading="Create Note"
                    initial_title=String::new()
                    initial_content=String::new()
                    on_cancel=on_create_cancel
                    on_submit=on_create_submit
                />
            </Show>
            <Show when=move || edit_note.get().is_some()>
                {move || {
                    let note = edit_note.get().unwrap_or_else(|| Note {
                        id: String::new(),
                        title: String::new(),
                        content: String::new(),
                        created_at: None,
                        updated_at: None,
                    });
                    view! {
                        <NoteDialog
                            heading="Edit Note"
                            initial_title=note.title
                            initial_content=note.content
                            on_cancel=on_edit_cancel
                            on_submit=on_edit_submit
                        />
                    }
                }}
            </Show>
            <Show when=move || delete_note_id.get().is_some()>
                <ConfirmDeleteDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
            </Show>
        </div>
    }
}

/// Modal dialog shared by note create and edit flows.
#[component]
fn NoteDialog(
    heading: &'static str,
    initial_title: String,
    initial_content: String,
    on_cancel: Callback<()>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let title = RwSignal::new(initial_title);
    let content = RwSignal::new(initial_content);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        match validate_note_input(&title.get()) {
            Ok(trimmed) => on_submit.run((trimmed, content.get())),
            Err(message) => info.set(message.to_owned()),
        }
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
                    "Content"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
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

/// Confirmation dialog shared by the entity pages.
#[component]
pub(crate) fn ConfirmDeleteDialog(on_cancel: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete"</h2>
                <p class="dialog__danger">"This cannot be undone."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
