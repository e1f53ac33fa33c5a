use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use mind_types::password::PasswordChecks;
use mind_types::OrgType;

use crate::components::password_checklist::PasswordChecklist;

#[derive(Clone, Debug, Default, PartialEq)]
struct RegistrationForm {
    organization_name: String,
    org_type: OrgType,
    full_name: String,
    email: String,
    password: String,
    confirmation: String,
}

impl RegistrationForm {
    fn checks(&self) -> PasswordChecks {
        PasswordChecks::evaluate(&self.password, &self.confirmation)
    }

    /// Messages for everything that blocks submission.
    fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.email.trim().is_empty() {
            problems.push("Email is required.".to_string());
        }
        if self.full_name.trim().is_empty() {
            problems.push("Full name is required.".to_string());
        }
        if self.organization_name.trim().is_empty() {
            problems.push("Organisation name is required.".to_string());
        }
        if !self.checks().all_passed() {
            problems.push("The password does not meet every requirement.".to_string());
        }
        problems
    }
}

fn parse_org_type(value: &str) -> OrgType {
    match value {
        "COMPANY" => OrgType::Company,
        _ => OrgType::School,
    }
}

#[component]
pub fn AdminRegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let (errors, setErrors) = signal(Vec::<String>::new());
    #[allow(unused_variables)]
    let (submitting, setSubmitting) = signal(false);
    #[allow(unused_variables)]
    let (registered, setRegistered) = signal(Option::<mind_types::RegisteredAdmin>::None);

    let checks = Signal::derive(move || form.with(RegistrationForm::checks));

    let edit = move |apply: fn(&mut RegistrationForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| apply(f, value));
            setErrors.set(Vec::new());
        }
    };

    let onSubmit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let current = form.get_untracked();
        let problems = current.problems();
        if !problems.is_empty() {
            setErrors.set(problems);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use mind_types::AdminRegistration;

            let request = AdminRegistration {
                email: current.email.trim().to_string(),
                password: current.password,
                full_name: current.full_name.trim().to_string(),
                organization_name: current.organization_name.trim().to_string(),
                org_type: current.org_type,
            };
            setSubmitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::admin_register(&request).await {
                    Ok(response) if response.success => setRegistered.set(response.user),
                    Ok(_) => setErrors.set(vec!["Registration failed. Please try again.".into()]),
                    Err(e) => setErrors.set(e.messages("Registration failed. Please try again.")),
                }
                setSubmitting.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card wide">
                {move || match registered.get() {
                    Some(admin) => {
                        let orgType = admin.organization_type.map(|t| t.label()).unwrap_or("-");
                        view! {
                            <div class="auth-header">
                                <h1>"Administrator account created"</h1>
                                <p>{format!("Organisation: {}", admin.organization)}</p>
                                <p>{format!("Type: {orgType}")}</p>
                            </div>
                            <a href="/login" class="btn btn-primary">"Go to login"</a>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="auth-header">
                                <h1>"Register an organisation"</h1>
                                <p>"Create your organisation and its administrator account."</p>
                            </div>

                            <Show when=move || !errors.get().is_empty()>
                                <ul class="error-box">
                                    {move || {
                                        errors
                                            .get()
                                            .into_iter()
                                            .map(|message| view! { <li>{message}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                            </Show>

                            <form on:submit=onSubmit>
                                <div class="form-group">
                                    <label for="organization_name">"Organisation name"</label>
                                    <input
                                        type="text"
                                        id="organization_name"
                                        required
                                        prop:value=move || form.with(|f| f.organization_name.clone())
                                        on:input=edit(|f, v| f.organization_name = v)
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="org_type">"Organisation type"</label>
                                    <select id="org_type" on:change=edit(|f, v| f.org_type = parse_org_type(&v))>
                                        <option value="SCHOOL" selected=move || form.with(|f| f.org_type == OrgType::School)>
                                            {OrgType::School.label()}
                                        </option>
                                        <option value="COMPANY" selected=move || form.with(|f| f.org_type == OrgType::Company)>
                                            {OrgType::Company.label()}
                                        </option>
                                    </select>
                                </div>
                                <div class="form-group">
                                    <label for="full_name">"Your full name"</label>
                                    <input
                                        type="text"
                                        id="full_name"
                                        required
                                        prop:value=move || form.with(|f| f.full_name.clone())
                                        on:input=edit(|f, v| f.full_name = v)
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="email">"Email"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        required
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=edit(|f, v| f.email = v)
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="password">"Password"</label>
                                    <input
                                        type="password"
                                        id="password"
                                        required
                                        prop:value=move || form.with(|f| f.password.clone())
                                        on:input=edit(|f, v| f.password = v)
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="confirmation">"Confirm password"</label>
                                    <input
                                        type="password"
                                        id="confirmation"
                                        required
                                        prop:value=move || form.with(|f| f.confirmation.clone())
                                        on:input=edit(|f, v| f.confirmation = v)
                                    />
                                </div>
                                <PasswordChecklist checks />
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    prop:disabled=move || submitting.get() || !checks.get().all_passed()
                                >
                                    {move || if submitting.get() { "Registering..." } else { "Create account" }}
                                </button>
                            </form>

                            <div class="auth-footer">
                                <a href="/login">"Already registered? Log in"</a>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            organization_name: "North High".into(),
            org_type: OrgType::School,
            full_name: "Ana Ruiz".into(),
            email: "ana@example.com".into(),
            password: "Secret123".into(),
            confirmation: "Secret123".into(),
        }
    }

    #[test]
    fn complete_form_has_no_problems() {
        assert!(filled().problems().is_empty());
    }

    #[test]
    fn every_missing_field_is_reported() {
        let form = RegistrationForm {
            confirmation: "Secret124".into(),
            ..RegistrationForm::default()
        };
        assert_eq!(form.problems().len(), 4);

        let blank_name = RegistrationForm {
            full_name: "   ".into(),
            ..filled()
        };
        assert_eq!(blank_name.problems(), vec!["Full name is required.".to_string()]);
    }

    #[test]
    fn org_type_defaults_to_school() {
        assert_eq!(parse_org_type("COMPANY"), OrgType::Company);
        assert_eq!(parse_org_type("SCHOOL"), OrgType::School);
        assert_eq!(parse_org_type(""), OrgType::School);
    }
}
