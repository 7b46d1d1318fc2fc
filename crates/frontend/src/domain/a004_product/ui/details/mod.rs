use contracts::domain::a004_product::{Catalog, CatalogForm};
use contracts::domain::common::{EntityKind, StoreError};
use contracts::shared::metadata::ValidationError;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::schema_form::SchemaForm;
use crate::shared::modal::Modal;

/// Product, brand or category dialog; which one is decided by `form` alone
#[component]
pub fn CatalogFormModal(
    title: String,
    form: CatalogForm,
    catalog: RwSignal<Catalog>,
    on_close: Callback<()>,
) -> impl IntoView {
    let values = RwSignal::new(catalog.with_untracked(|c| c.initial_values(form)));
    let errors = RwSignal::new(ValidationError::default());

    let ref_options = Callback::new(move |collection: &'static str| {
        EntityKind::from_collection(collection)
            .map(|kind| catalog.with(|c| c.reference_options(kind)))
            .unwrap_or_default()
    });

    let on_save = move |_| {
        let submitted = values.get_untracked();
        let result = catalog.try_update(|c| c.submit(form, &submitted).map(|_| ()));

        match result {
            Some(Err(StoreError::Validation(e))) => errors.set(e),
            Some(Err(e)) => {
                log::warn!("{} ignored: {}", form.title(), e);
                on_close.run(());
            }
            _ => on_close.run(()),
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <SchemaForm
                schema=form.schema()
                values=values
                errors=errors
                ref_options=ref_options
            />
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save>
                    {if form.is_edit() { "Update" } else { "Create" }}
                </Button>
            </div>
        </Modal>
    }
}
