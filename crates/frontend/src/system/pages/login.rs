use contracts::shared::metadata::{FormModel, FormValues, ValidationError};
use contracts::system::auth::{ResetPasswordForm, FIELD_EMAIL, FIELD_PASSWORD};
use leptos::prelude::*;

use crate::app::use_config;
use crate::shared::components::field_error::FieldError;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_config();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationError::default());
    let (reset_mode, set_reset_mode) = signal(false);
    let (notice, set_notice) = signal(Option::<String>::None);

    let (_, set_auth_state) = use_auth();

    let values = move || {
        FormValues::new()
            .with(FIELD_EMAIL, email.get_untracked())
            .with(FIELD_PASSWORD, password.get_untracked())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_notice.set(None);

        let result = if reset_mode.get_untracked() {
            ResetPasswordForm::parse(&values()).map(|form| set_notice.set(Some(form.notice())))
        } else {
            do_login(&values(), set_auth_state)
        };

        match result {
            Ok(()) => errors.set(ValidationError::default()),
            Err(e) => {
                log::debug!("login form rejected: {}", e);
                errors.set(e);
            }
        }
    };

    let switch_mode = move |_| {
        set_reset_mode.update(|reset| *reset = !*reset);
        errors.set(ValidationError::default());
        set_notice.set(None);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{config.app.title.clone()}</h1>
                <h2>{move || if reset_mode.get() { "Reset password" } else { "Sign in" }}</h2>

                {move || notice.get().map(|text| view! { <div class="alert alert--success">{text}</div> })}

                <form on:submit=on_submit novalidate>
                    <div class="form__group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class="form__input"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors field=FIELD_EMAIL />
                    </div>

                    <Show when=move || !reset_mode.get()>
                        <div class="form__group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                class="form__input"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <FieldError errors=errors field=FIELD_PASSWORD />
                        </div>
                    </Show>

                    <button type="submit" class="btn-primary">
                        {move || if reset_mode.get() { "Send reset link" } else { "Login" }}
                    </button>
                </form>

                <button class="login-box__link" on:click=switch_mode>
                    {move || if reset_mode.get() { "Back to sign in" } else { "Forgot password?" }}
                </button>
            </div>
        </div>
    }
}
