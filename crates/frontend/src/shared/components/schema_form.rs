//! Form fields rendered from a static `FormSchema`

use contracts::shared::metadata::{
    FieldMetadata, FieldType, FormSchema, FormValues, ValidationError,
};
use leptos::prelude::*;

use super::field_error::FieldError;

/// `(value, label)` pairs for the select of a reference field
pub type RefOptions = Vec<(String, String)>;

#[component]
pub fn SchemaForm(
    schema: &'static FormSchema,
    values: RwSignal<FormValues>,
    #[prop(into)] errors: Signal<ValidationError>,
    /// Options for `AggregateRef` fields, looked up by referenced collection
    #[prop(optional)]
    ref_options: Option<Callback<&'static str, RefOptions>>,
) -> impl IntoView {
    schema
        .fields
        .iter()
        .map(|field| {
            view! {
                <div class="form__group">
                    <label class="form__label" for=field.name>
                        {field.label}
                        {field.validation.is_required().then_some(" *")}
                    </label>
                    {field_input(field, values, ref_options)}
                    <FieldError errors=errors field=field.name />
                </div>
            }
        })
        .collect_view()
}

/// Enum option matching the stored raw value
fn choice_selected(values: &FormValues, name: &str, choice: &str) -> bool {
    values.get(name).trim() == choice
}

/// Reference option matching the stored id; blank and unparsable ids select the `0` placeholder
fn reference_selected(values: &FormValues, name: &str, option: &str) -> bool {
    values.id(name).to_string() == option
}

fn field_input(
    field: &'static FieldMetadata,
    values: RwSignal<FormValues>,
    ref_options: Option<Callback<&'static str, RefOptions>>,
) -> AnyView {
    let name = field.name;
    let current = move || values.with(|v| v.get(name).to_string());

    match field.field_type {
        FieldType::Enum => {
            let choices = field.enum_values.unwrap_or(&[]);
            view! {
                <select
                    id=name
                    class="form__select"
                    on:change=move |ev| values.update(|v| v.set(name, event_target_value(&ev)))
                >
                    {choices
                        .iter()
                        .map(|choice| {
                            let choice = *choice;
                            view! {
                                <option
                                    value=choice
                                    selected=move || values.with(|v| choice_selected(v, name, choice))
                                >
                                    {choice}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        FieldType::AggregateRef => {
            let collection = field.ref_aggregate.unwrap_or_default();
            let options = move || {
                ref_options
                    .map(|lookup| lookup.run(collection))
                    .unwrap_or_default()
            };
            view! {
                <select
                    id=name
                    class="form__select"
                    on:change=move |ev| values.update(|v| v.set(name, event_target_value(&ev)))
                >
                    <option
                        value="0"
                        selected=move || values.with(|v| reference_selected(v, name, "0"))
                    >
                        {format!("Select {}", field.label.to_lowercase())}
                    </option>
                    {move || {
                        options()
                            .into_iter()
                            .map(|(value, label)| {
                                let selected = {
                                    let value = value.clone();
                                    move || values.with(|v| reference_selected(v, name, &value))
                                };
                                view! { <option value=value selected=selected>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            }
            .into_any()
        }
        _ => view! {
            <input
                id=name
                class="form__input"
                type=field.field_type.input_type()
                placeholder=field.placeholder.unwrap_or_default()
                prop:value=current
                on:input=move |ev| values.update(|v| v.set(name, event_target_value(&ev)))
            />
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_prefill_selects_stored_choice() {
        let values = FormValues::from([("role", "Admin")]);
        assert!(choice_selected(&values, "role", "Admin"));
        assert!(!choice_selected(&values, "role", "User"));
    }

    #[test]
    fn test_edit_prefill_selects_stored_reference() {
        let values = FormValues::from([("brand_id", "2")]);
        assert!(reference_selected(&values, "brand_id", "2"));
        assert!(!reference_selected(&values, "brand_id", "1"));
        assert!(!reference_selected(&values, "brand_id", "0"));
    }

    #[test]
    fn test_unselected_reference_selects_placeholder() {
        for raw in ["", "0", "x"] {
            let values = FormValues::from([("brand_id", raw)]);
            assert!(reference_selected(&values, "brand_id", "0"), "raw {:?}", raw);
        }
    }
}
