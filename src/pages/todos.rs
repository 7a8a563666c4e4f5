//! Todos page: list, create, toggle completion, and delete todos.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::guards::PermissionGuard;
use crate::components::header::AppHeader;
use crate::net::types::{Action, Permission, Resource, Todo};
use crate::pages::notes::ConfirmDeleteDialog;
use crate::state::todos::TodosState;
use crate::util::auth::{install_unauth_redirect, use_session};

/// A copy of `todo` with completion flipped, ready for the update call.
fn toggled(todo: &Todo) -> Todo {
    Todo {
        completed: !todo.completed,
        ..todo.clone()
    }
}

fn load_todos(todos: RwSignal<TodosState>) {
    todos.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_todos::list_todos().await {
            Ok(items) => todos.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(message) => todos.update(|s| {
                s.loading = false;
                s.error = Some(message);
            }),
        }
    });
}

#[component]
pub fn TodosPage() -> impl IntoView {
    let session = use_session();
    let todos = expect_context::<RwSignal<TodosState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() || !session.get().is_authenticated() {
            return;
        }
        loaded.set(true);
        load_todos(todos);
    });

    let show_create = RwSignal::new(false);
    let delete_todo_id = RwSignal::new(None::<String>);

    let on_create_cancel = Callback::new(move |_| show_create.set(false));
    let on_delete_cancel = Callback::new(move |_| delete_todo_id.set(None));

    let on_create_submit = Callback::new(move |(title, due, priority): (String, String, String)| {
        show_create.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let due = (!due.is_empty()).then_some(due);
            let priority = (!priority.is_empty()).then_some(priority);
            match crate::net::api_todos::create_todo(&title, due.as_deref(), priority.as_deref())
                .await
            {
                Ok(todo) => todos.update(|s| s.items.insert(0, todo)),
                Err(message) => todos.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, due, priority);
        }
    });

    let on_toggle = move |todo: Todo| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let next = toggled(&todo);
            match crate::net::api_todos::update_todo(&todo.id, &next).await {
                Ok(updated) => todos.update(|s| {
                    if let Some(slot) = s.items.iter_mut().find(|t| t.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(message) => todos.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = todo;
        }
    };

    let on_delete_confirm = Callback::new(move |_| {
        let Some(id) = delete_todo_id.get_untracked() else {
            return;
        };
        delete_todo_id.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_todos::delete_todo(&id).await {
                Ok(()) => todos.update(|s| s.items.retain(|t| t.id != id)),
                Err(message) => todos.update(|s| s.error = Some(message)),
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
                    <h1>"Todos"</h1>
                    <span class="entity-page__count">
                        {move || format!("{} open", todos.get().open_count())}
                    </span>
                    <PermissionGuard permission=Permission::new(Resource::Todo, Action::Create)>
                        <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                            "+ New Todo"
                        </button>
                    </PermissionGuard>
                </div>

                <Show when=move || todos.get().error.is_some()>
                    <p class="entity-page__error">{move || todos.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !todos.get().loading
                    fallback=move || view! { <p>"Loading todos..."</p> }
                >
                    <Show
                        when=move || !todos.get().items.is_empty()
                        fallback=move || view! { <p class="entity-page__empty">"Nothing to do."</p> }
                    >
                        <ul class="entity-list">
                            {move || {
                                todos
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|todo| {
                                        let toggle_target = todo.clone();
                                        let delete_id = todo.id.clone();
                                        view! {
                                            <li class="entity-list__item">
                                                <PermissionGuard
                                                    permission=Permission::new(Resource::Todo, Action::Update)
                                                    fallback={
                                                        let completed = todo.completed;
                                                        move || {
                                                            view! {
                                                                <span class="entity-list__check">
                                                                    {if completed { "☑" } else { "☐" }}
                                                                </span>
                                                            }
                                                        }
                                                    }
                                                >
                                                    {
                                                        let toggle_target = toggle_target.clone();
                                                        view! {
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=toggle_target.completed
                                                                on:change=move |_| on_toggle(toggle_target.clone())
                                                            />
                                                        }
                                                    }
                                                </PermissionGuard>
                                                <div class="entity-list__text">
                                                    <h3 class=("entity-list__done", todo.completed)>
                                                        {todo.title.clone()}
                                                    </h3>
                                                    <p>
                                                        {todo.due_date.clone().map(|d| format!("due {d}")).unwrap_or_default()}
                                                        " "
                                                        {todo.priority.clone().unwrap_or_default()}
                                                    </p>
                                                </div>
                                                <div class="entity-list__actions">
                                                    <PermissionGuard permission=Permission::new(
                                                        Resource::Todo,
                                                        Action::Delete,
                                                    )>
                                                        {
                                                            let delete_id = delete_id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| delete_todo_id.set(Some(delete_id.clone()))
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
                <CreateTodoDialog on_cancel=on_create_cancel on_submit=on_create_submit/>
            </Show>
            <Show when=move || delete_todo_id.get().is_some()>
                <ConfirmDeleteDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a todo.
#[component]
fn CreateTodoDialog(
    on_cancel: Callback<()>,
    on_submit: Callback<(String, String, String)>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let due = RwSignal::new(String::new());
    let priority = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let title_value = title.get();
        if title_value.trim().is_empty() {
            info.set("Enter a title first.".to_owned());
            return;
        }
        on_submit.run((title_value.trim().to_owned(), due.get(), priority.get()));
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Todo"</h2>
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
                    "Due date"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || due.get()
                        on:input=move |ev| due.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Priority"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="low / medium / high"
                        prop:value=move || priority.get()
                        on:input=move |ev| priority.set(event_target_value(&ev))
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
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
