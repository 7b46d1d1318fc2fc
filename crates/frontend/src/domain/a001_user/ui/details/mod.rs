use contracts::domain::a001_user::{User, UserForm, UserId, USER_SCHEMA};
use contracts::domain::common::{EntityStore, StoreError};
use contracts::shared::metadata::{FormModel, ValidationError};
use contracts::shared::modal::FormMode;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::schema_form::SchemaForm;
use crate::shared::modal::Modal;

/// Create/edit dialog for one user; pre-filled from the store when editing
#[component]
pub fn UserFormModal(
    title: String,
    mode: FormMode<UserId>,
    store: RwSignal<EntityStore<User>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = match mode {
        FormMode::Edit(id) => store.with_untracked(|s| s.form_values(id)),
        FormMode::Create => None,
    };
    let values = RwSignal::new(initial.unwrap_or_else(|| UserForm::default().to_values()));
    let errors = RwSignal::new(ValidationError::default());

    let on_save = move |_| {
        let submitted = values.get_untracked();
        let result = store.try_update(|s| match mode {
            FormMode::Create => s.create(&submitted).map(|_| ()),
            FormMode::Edit(id) => s.update(id, &submitted).map(|_| ()),
        });

        match result {
            Some(Err(StoreError::Validation(e))) => errors.set(e),
            Some(Err(e)) => {
                log::warn!("user save ignored: {}", e);
                on_close.run(());
            }
            _ => on_close.run(()),
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <SchemaForm schema=&USER_SCHEMA values=values errors=errors />
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save>
                    {mode.verb()}
                </Button>
            </div>
        </Modal>
    }
}
