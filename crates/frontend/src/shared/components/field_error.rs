use contracts::shared::metadata::ValidationError;
use leptos::prelude::*;

/// Inline message for one field, empty when the field is valid
#[component]
pub fn FieldError(
    #[prop(into)] errors: Signal<ValidationError>,
    field: &'static str,
) -> impl IntoView {
    move || {
        errors.with(|errors| {
            errors
                .get(field)
                .map(|message| view! { <div class="form__error">{message.to_string()}</div> })
        })
    }
}
