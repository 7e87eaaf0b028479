//! Account registration page.
//!
//! Registration does not sign the user in; on success the page shows the
//! server's message and moves on to the login route.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::config::LOGIN_ROUTE;
use crate::net::types::RegisterRequest;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Raw form input, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub accept_terms: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// `local@domain.tld` shape: some `@` preceded by a non-space character and
/// followed by non-space text with an inner `.`.
pub(crate) fn looks_like_email(raw: &str) -> bool {
    raw.split_whitespace().any(|token| {
        token.match_indices('@').any(|(at, _)| {
            let domain = &token[at + 1..];
            at > 0
                && domain
                    .char_indices()
                    .any(|(dot, c)| c == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// Validate the form and build the backend request.
///
/// # Errors
///
/// Returns every failing field at once so the form can flag them together.
pub fn validate_registration(form: &RegisterForm) -> Result<RegisterRequest, RegisterErrors> {
    let mut errors = RegisterErrors::default();

    if form.full_name.trim().is_empty() {
        errors.full_name = Some("Enter your full name.");
    }
    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some("Enter your email.");
    } else if !looks_like_email(email) {
        errors.email = Some("Email address is not valid.");
    }
    if form.password.is_empty() {
        errors.password = Some("Enter a password.");
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 6 characters.");
    }
    if form.password != form.confirm_password {
        errors.confirm_password = Some("Passwords do not match.");
    }
    if !form.accept_terms {
        errors.accept_terms = Some("Please accept the terms of use.");
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
        full_name: form.full_name.trim().to_owned(),
        phone: form.phone.trim().to_owned(),
    })
}

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|msg| view! { <p class="form-error">{msg}</p> })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(RegisterErrors::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_registration(&form.get()) {
            Ok(request) => {
                errors.set(RegisterErrors::default());
                request
            }
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let config = crate::config::ApiConfig::from_build_env();
                match crate::net::api::register(&config, &request).await {
                    Ok(message) => {
                        info.set(if message.is_empty() { "Registration complete.".to_owned() } else { message });
                        navigate(LOGIN_ROUTE, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(format!("Registration failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="register-page">
            <div class="login-card">
                <h1>"Register"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.with(|e| e.full_name))/>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.with(|e| e.email))/>
                    <input
                        class="login-input"
                        type="tel"
                        placeholder="Phone number"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="At least 6 characters"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.with(|e| e.password))/>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Repeat password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.with(|e| e.confirm_password))/>
                    <label class="login-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.accept_terms)
                            on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                        />
                        "I accept the terms of use"
                    </label>
                    <FieldError message=Signal::derive(move || errors.with(|e| e.accept_terms))/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? " <a href=LOGIN_ROUTE>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
