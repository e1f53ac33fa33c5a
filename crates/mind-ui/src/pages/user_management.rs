use leptos::prelude::*;
use mind_types::UserAccount;

use crate::components::loading::Loading;
use crate::components::toast::use_toast;

fn delete_prompt(account: &UserAccount) -> String {
    let name = if account.full_name.is_empty() {
        &account.email
    } else {
        &account.full_name
    };
    format!("Delete {name}? This cannot be undone.")
}

/// Account list for administrators, with deletion.
#[component]
pub fn UserManagement() -> impl IntoView {
    #[allow(unused_variables)]
    let (accounts, setAccounts) = signal(Option::<Result<Vec<UserAccount>, String>>::None);
    #[allow(unused_variables)]
    let (deleting, setDeleting) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let toast = use_toast();

    #[cfg(feature = "hydrate")]
    let refresh = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::api::users()
                .await
                .map_err(|e| e.user_message("Failed to load users"));
            setAccounts.set(Some(result));
        });
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| refresh());

    let remove = move |account: UserAccount| {
        let prompt = delete_prompt(&account);

        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&prompt).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            setDeleting.set(Some(account.id.clone()));
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::delete_user(&account.id).await {
                    Ok(()) => {
                        toast.success(format!("Deleted {}.", account.email));
                        refresh();
                    }
                    Err(e) => toast.error(e.user_message("Failed to delete the user.")),
                }
                setDeleting.set(None);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = prompt;
    };

    view! {
        <section class="card">
            <div class="card-title">"User management"</div>
            {move || match accounts.get() {
                None => view! { <Loading message="Loading users..." /> }.into_any(),
                Some(Err(e)) => view! { <p class="form-error">{e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="empty-state">"No users yet."</p> }.into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Department"</th>
                                    <th>"State"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|account| {
                                        let id = account.id.clone();
                                        let isAdmin = account.role.is_admin();
                                        let row = account.clone();
                                        view! {
                                            <tr>
                                                <td>{account.full_name}</td>
                                                <td>{account.email}</td>
                                                <td>{account.role.label().to_string()}</td>
                                                <td>{account.department.unwrap_or_else(|| "-".into())}</td>
                                                <td>
                                                    {if account.is_activated { "Active" } else { "Invited" }}
                                                </td>
                                                <td>
                                                    <Show when=move || !isAdmin>
                                                        <button
                                                            type="button"
                                                            class="btn btn-danger btn-small"
                                                            prop:disabled={
                                                                let id = id.clone();
                                                                move || deleting.get().as_deref() == Some(id.as_str())
                                                            }
                                                            on:click={
                                                                let row = row.clone();
                                                                move |_| remove(row.clone())
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use mind_types::Role;

    use super::*;

    fn account(fullName: &str) -> UserAccount {
        UserAccount {
            id: "7".into(),
            email: "kim@example.com".into(),
            full_name: fullName.into(),
            role: Role::User,
            department: None,
            is_activated: true,
        }
    }

    #[test]
    fn prompt_names_the_user() {
        assert_eq!(
            delete_prompt(&account("Kim Lee")),
            "Delete Kim Lee? This cannot be undone."
        );
        assert_eq!(
            delete_prompt(&account("")),
            "Delete kim@example.com? This cannot be undone."
        );
    }
}
