//! Which create/edit form is open, if any

use serde::{Deserialize, Serialize};

/// Whether a form creates a new record or edits the record with the given id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id: Copy> FormMode<Id> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn edit_id(&self) -> Option<Id> {
        match self {
            FormMode::Edit(id) => Some(*id),
            FormMode::Create => None,
        }
    }

    /// Verb used in modal titles and submit buttons
    pub fn verb(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit(_) => "Update",
        }
    }
}

/// At most one modal form is open at a time.
///
/// `F` names the form; opening a new one replaces whatever was open.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalController<F> {
    active: Option<ActiveModal<F>>,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveModal<F> {
    title: String,
    form: F,
}

impl<F> Default for ModalController<F> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<F> ModalController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, title: impl Into<String>, form: F) {
        self.active = Some(ActiveModal {
            title: title.into(),
            form,
        });
    }

    /// Close whatever is open; closing a closed controller is a no-op
    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&F> {
        self.active.as_ref().map(|modal| &modal.form)
    }

    pub fn title(&self) -> Option<&str> {
        self.active.as_ref().map(|modal| modal.title.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

impl<F: PartialEq> ModalController<F> {
    pub fn is_showing(&self, form: &F) -> bool {
        self.active() == Some(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Form {
        Brand(FormMode<i64>),
        Product(FormMode<i64>),
    }

    #[test]
    fn test_opening_replaces_active_form() {
        let mut modal = ModalController::new();
        assert!(!modal.is_open());

        modal.open("Create Brand", Form::Brand(FormMode::Create));
        modal.open("Update Product", Form::Product(FormMode::Edit(3)));

        assert_eq!(modal.active(), Some(&Form::Product(FormMode::Edit(3))));
        assert_eq!(modal.title(), Some("Update Product"));
        assert!(!modal.is_showing(&Form::Brand(FormMode::Create)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut modal = ModalController::new();
        modal.open("Update Brand", Form::Brand(FormMode::Edit(1)));
        modal.close();
        modal.close();
        assert_eq!(modal.active(), None);
        assert_eq!(modal.title(), None);
    }

    #[test]
    fn test_form_mode_helpers() {
        assert_eq!(FormMode::<i64>::Create.verb(), "Create");
        assert_eq!(FormMode::Edit(7).edit_id(), Some(7));
        assert!(!FormMode::<i64>::Create.is_edit());
    }
}
