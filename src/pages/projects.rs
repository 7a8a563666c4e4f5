//! Projects page: list, create, edit, and delete projects.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::guards::PermissionGuard;
use crate::components::header::AppHeader;
use crate::net::types::{Action, Permission, Project, Resource};
use crate::pages::notes::ConfirmDeleteDialog;
use crate::state::projects::ProjectsState;
use crate::util::auth::{install_unauth_redirect, use_session};

fn load_projects(projects: RwSignal<ProjectsState>) {
    projects.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_projects::list_projects().await {
            Ok(items) => projects.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(message) => projects.update(|s| {
                s.loading = false;
                s.error = Some(message);
            }),
        }
    });
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let session = use_session();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() || !session.get().is_authenticated() {
            return;
        }
        loaded.set(true);
        load_projects(projects);
    });

    let show_create = RwSignal::new(false);
    let edit_project = RwSignal::new(None::<Project>);
    let delete_project_id = RwSignal::new(None::<String>);

    let on_create_cancel = Callback::new(move |_| show_create.set(false));
    let on_edit_cancel = Callback::new(move |_| edit_project.set(None));
    let on_delete_cancel = Callback::new(move |_| delete_project_id.set(None));

    let on_create_submit = Callback::new(move |(name, description): (String, String)| {
        show_create.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let description = (!description.is_empty()).then_some(description);
            match crate::net::api_projects::create_project(&name, description.as_deref()).await {
                Ok(project) => projects.update(|s| s.items.insert(0, project)),
                Err(message) => projects.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, description);
        }
    });

    let on_edit_submit = Callback::new(move |(name, description, status): (String, String, String)| {
        let Some(project) = edit_project.get_untracked() else {
            return;
        };
        edit_project.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let next = Project {
                id: project.id.clone(),
                name,
                description: (!description.is_empty()).then_some(description),
                status: (!status.is_empty()).then_some(status),
            };
            match crate::net::api_projects::update_project(&project.id, &next).await {
                Ok(updated) => projects.update(|s| {
                    if let Some(slot) = s.items.iter_mut().find(|p| p.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(message) => projects.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (project, name, description, status);
        }
    });

    let on_delete_confirm = Callback::new(move |_| {
        let Some(id) = delete_project_id.get_untracked() else {
            return;
        };
        delete_project_id.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_projects::delete_project(&id).await {
                Ok(()) => projects.update(|s| s.items.retain(|p| p.id != id)),
                Err(message) => projects.update(|s| s.error = Some(message)),
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
                    <h1>"Projects"</h1>
                    <PermissionGuard permission=Permission::new(Resource::Project, Action::Create)>
                        <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                            "+ New Project"
                        </button>
                    </PermissionGuard>
                </div>

                <Show when=move || projects.get().error.is_some()>
                    <p class="entity-page__error">
                        {move || projects.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !projects.get().loading
                    fallback=move || view! { <p>"Loading projects..."</p> }
                >
                    <Show
                        when=move || !projects.get().items.is_empty()
                        fallback=move || {
                            view! { <p class="entity-page__empty">"No projects yet."</p> }
                        }
                    >
                        <ul class="entity-list">
                            {move || {
                                projects
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|project| {
                                        let edit_target = project.clone();
                                        let delete_id = project.id.clone();
                                        view! {
                                            <li class="entity-list__item">
                                                <div class="entity-list__text">
                                                    <h3>
                                                        {project.name.clone()}
                                                        <span class="entity-list__meta">
                                                            {project
                                                                .status
                                                                .clone()
                                                                .map(|s| format!(" [{s}]"))
                                                                .unwrap_or_default()}
                                                        </span>
                                                    </h3>
                                                    <p>{project.description.clone().unwrap_or_default()}</p>
                                                </div>
                                                <div class="entity-list__actions">
                                                    <PermissionGuard permission=Permission::new(
                                                        Resource::Project,
                                                        Action::Update,
                                                    )>
                                                        {
                                                            let edit_target = edit_target.clone();
                                                            view! {
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| edit_project.set(Some(edit_target.clone()))
                                                                >
                                                                    "Edit"
                                                                </button>
                                                            }
                                                        }
                                                    </PermissionGuard>
                                                    <PermissionGuard permission=Permission::new(
                                                        Resource::Project,
                                                        Action::Delete,
                                                    )>
                                                        {
                                                            let delete_id = delete_id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| delete_project_id.set(Some(delete_id.clone()))
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
                <CreateProjectDialog on_cancel=on_create_cancel on_submit=on_create_submit/>
            </Show>
            <Show when=move || edit_project.get().is_some()>
                {move || {
                    let project = edit_project.get().unwrap_or_else(|| Project {
                        id: String::new(),
                        name: String::new(),
                        description: None,
                        status: None,
                    });
                    view! {
                        <EditProjectDialog
                            initial_name=project.name
                            initial_description=project.description.unwrap_or_default()
                            initial_status=project.status.unwrap_or_default()
                            on_cancel=on_edit_cancel
                            on_submit=on_edit_submit
                        />
                    }
                }}
            </Show>
            <Show when=move || delete_project_id.get().is_some()>
                <ConfirmDeleteDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a project.
#[component]
fn CreateProjectDialog(
    on_cancel: Callback<()>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let name_value = name.get();
        if name_value.trim().is_empty() {
            info.set("Enter a project name first.".to_owned());
            return;
        }
        on_submit.run((name_value.trim().to_owned(), description.get()));
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Project"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
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
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog for editing a project, including its status label.
#[component]
fn EditProjectDialog(
    initial_name: String,
    initial_description: String,
    initial_status: String,
    on_cancel: Callback<()>,
    on_submit: Callback<(String, String, String)>,
) -> impl IntoView {
    let name = RwSignal::new(initial_name);
    let description = RwSignal::new(initial_description);
    let status = RwSignal::new(initial_status);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let name_value = name.get();
        if name_value.trim().is_empty() {
            info.set("Enter a project name first.".to_owned());
            return;
        }
        on_submit.run((name_value.trim().to_owned(), description.get(), status.get()));
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Project"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Status"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="active / paused / done"
                        prop:value=move || status.get()
                        on:input=move |ev| status.set(event_target_value(&ev))
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
