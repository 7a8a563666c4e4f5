//! Resources page: list, save, edit, and delete external links.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::guards::PermissionGuard;
use crate::components::header::AppHeader;
use crate::net::types::{Action, Permission, Resource, ResourceLink};
use crate::pages::notes::ConfirmDeleteDialog;
use crate::state::resources::ResourcesState;
use crate::util::auth::{install_unauth_redirect, use_session};

/// Validate the resource form. Returns trimmed `(title, url)`.
fn validate_resource_input(title: &str, url: &str) -> Result<(String, String), &'static str> {
    let title = title.trim();
    let url = url.trim();
    if title.is_empty() {
        return Err("Enter a title first.");
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("Enter a full http(s) URL.");
    }
    Ok((title.to_owned(), url.to_owned()))
}

fn load_resources(resources: RwSignal<ResourcesState>) {
    resources.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_resources::list_resources().await {
            Ok(items) => resources.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(message) => resources.update(|s| {
                s.loading = false;
                s.error = Some(message);
            }),
        }
    });
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let session = use_session();
    let resources = expect_context::<RwSignal<ResourcesState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() || !session.get().is_authenticated() {
            return;
        }
        loaded.set(true);
        load_resources(resources);
    });

    let show_create = RwSignal::new(false);
    let edit_resource = RwSignal::new(None::<ResourceLink>);
    let delete_resource_id = RwSignal::new(None::<String>);

    let on_create_cancel = Callback::new(move |_| show_create.set(false));
    let on_edit_cancel = Callback::new(move |_| edit_resource.set(None));
    let on_delete_cancel = Callback::new(move |_| delete_resource_id.set(None));

    let on_create_submit = Callback::new(move |(title, url, description): (String, String, String)| {
        show_create.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let description = (!description.is_empty()).then_some(description);
            match crate::net::api_resources::create_resource(&title, &url, description.as_deref())
                .await
            {
                Ok(resource) => resources.update(|s| s.items.insert(0, resource)),
                Err(message) => resources.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, url, description);
        }
    });

    let on_edit_submit = Callback::new(move |(title, url, description): (String, String, String)| {
        let Some(resource) = edit_resource.get_untracked() else {
            return;
        };
        edit_resource.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let next = ResourceLink {
                id: resource.id.clone(),
                title,
                url,
                description: (!description.is_empty()).then_some(description),
            };
            match crate::net::api_resources::update_resource(&resource.id, &next).await {
                Ok(updated) => resources.update(|s| {
                    if let Some(slot) = s.items.iter_mut().find(|r| r.id == updated.id) {
                        *slot = updated;
                    }
                }),
                Err(message) => resources.update(|s| s.error = Some(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (resource, title, url, description);
        }
    });

    let on_delete_confirm = Callback::new(move |_| {
        let Some(id) = delete_resource_id.get_untracked() else {
            return;
        };
        delete_resource_id.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_resources::delete_resource(&id).await {
                Ok(()) => resources.update(|s| s.items.retain(|r| r.id != id)),
                Err(message) => resources.update(|s| s.error = Some(message)),
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
                    <h1>"Resources"</h1>
                    <PermissionGuard permission=Permission::new(
                        Resource::ResourceLink,
                        Action::Create,
                    )>
                        <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                            "+ Save Link"
                        </button>
                    </PermissionGuard>
                </div>

                <Show when=move || resources.get().error.is_some()>
                    <p class="entity-page__error">
                        {move || resources.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show
                    when=move || !resources.get().loading
                    fallback=move || view! { <p>"Loading resources..."</p> }
                >
                    <Show
                        when=move || !resources.get().items.is_empty()
                        fallback=move || {
                            view! { <p class="entity-page__empty">"No saved links yet."</p> }
                        }
                    >
                        <ul class="entity-list">
                            {move || {
                                resources
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|resource| {
                                        let edit_target = resource.clone();
                                        let delete_id = resource.id.clone();
                                        view! {
                                            <li class="entity-list__item">
                                                <div class="entity-list__text">
                                                    <h3>
                                                        <a href=resource.url.clone() target="_blank" rel="noreferrer">
                                                            {resource.title.clone()}
                                                        </a>
                                                    </h3>
                                                    <p>{resource.description.clone().unwrap_or_default()}</p>
                                                </div>
                                                <div class="entity-list__actions">
                                                    <PermissionGuard permission=Permission::new(
                                                        Resource::ResourceLink,
                                                        Action::Update,
                                                    )>
                                                        {
                                                            let edit_target = edit_target.clone();
                                                            view! {
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| edit_resource.set(Some(edit_target.clone()))
                                                                >
                                                                    "Edit"
                                                                </button>
                                                            }
                                                        }
                                                    </PermissionGuard>
                                                    <PermissionGuard permission=Permission::new(
                                                        Resource::ResourceLink,
                                                        Action::Delete,
                                                    )>
                                                        {
                                                            let delete_id = delete_id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| delete_resource_id.set(Some(delete_id.clone()))
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
                <ResourceDialog
                    heading="Save Link"
                    initial_title=String::new()
                    initial_url=String::new()
                    initial_description=String::new()
                    on_cancel=on_create_cancel
                    on_submit=on_create_submit
                />
            </Show>
            <Show when=move || edit_resource.get().is_some()>
                {move || {
                    let resource = edit_resource.get().unwrap_or_else(|| ResourceLink {
                        id: String::new(),
                        title: String::new(),
                        url: String::new(),
                        description: None,
                    });
                    view! {
                        <ResourceDialog
                            heading="Edit Link"
                            initial_title=resource.title
                            initial_url=resource.url
                            initial_description=resource.description.unwrap_or_default()
                            on_cancel=on_edit_cancel
                            on_submit=on_edit_submit
                        />
                    }
                }}
            </Show>
            <Show when=move || delete_resource_id.get().is_some()>
                <ConfirmDeleteDialog on_cancel=on_delete_cancel on_confirm=on_delete_confirm/>
            </Show>
        </div>
    }
}

/// Modal dialog shared by resource create and edit flows.
#[component]
fn ResourceDialog(
    heading: &'static str,
    initial_title: String,
    initial_url: String,
    initial_description: String,
    on_cancel: Callback<()>,
    on_submit: Callback<(String, String, String)>,
) -> impl IntoView {
    let title = RwSignal::new(initial_title);
    let url = RwSignal::new(initial_url);
    let description = RwSignal::new(initial_description);
    let info = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        match validate_resource_input(&title.get(), &url.get()) {
            Ok((title_value, url_value)) => {
                on_submit.run((title_value, url_value, description.get()));
            }
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
                    "URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://"
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(event_target_value(&ev))
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
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
