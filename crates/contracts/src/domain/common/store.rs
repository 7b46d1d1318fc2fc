//! In-memory ordered entity store backing one CRUD table

use log::{debug, warn};

use super::{AggregateId, AggregateRoot, ConfirmPort, Confirmed, EditableAggregate, StoreError};
use crate::shared::metadata::{FormModel, FormValues};

/// Ordered collection of aggregates; insertion order is display order.
///
/// Ids are assigned from a high-water mark that only grows, so an id is never
/// handed out twice during the store's lifetime, even after deletions.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T> {
    items: Vec<T>,
    high_water: i64,
}

impl<T: AggregateRoot> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AggregateRoot> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }

    /// Store initialised from static seed data
    pub fn seeded(items: Vec<T>) -> Self {
        let high_water = items
            .iter()
            .map(|item| item.id().value())
            .max()
            .unwrap_or(0)
            .max(0);
        debug!(
            "{}: seeded with {} records, next id {}",
            T::collection_name(),
            items.len(),
            high_water + 1
        );
        Self { items, high_water }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Id the next created record will receive
    pub fn next_id(&self) -> T::Id {
        T::Id::new(self.high_water + 1)
    }

    fn position(&self, id: T::Id) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| {
                warn!("{}: id {} not found", T::collection_name(), id.value());
                StoreError::NotFound {
                    entity: T::collection_name(),
                    id: id.value(),
                }
            })
    }

    /// Mutable access to the first record with `id`
    pub fn get_mut(&mut self, id: T::Id) -> Result<&mut T, StoreError> {
        let index = self.position(id)?;
        Ok(&mut self.items[index])
    }

    /// Remove the first record with `id`.
    ///
    /// Confirmation is the caller's job; see [`EntityStore::remove_confirmed`].
    pub fn remove(&mut self, id: T::Id) -> Result<T, StoreError> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        debug!("{}: removed id {}", T::collection_name(), id.value());
        Ok(removed)
    }

    /// Remove after the operator confirmed; a declined prompt leaves the store untouched.
    ///
    /// A missing id is reported before anyone is asked.
    pub fn remove_confirmed(
        &mut self,
        id: T::Id,
        port: &dyn ConfirmPort,
        message: &str,
    ) -> Result<Confirmed<T>, StoreError> {
        self.position(id)?;
        if !port.confirm(message) {
            debug!("{}: removal of id {} declined", T::collection_name(), id.value());
            return Ok(Confirmed::Declined);
        }
        self.remove(id).map(Confirmed::Done)
    }
}

impl<T: EditableAggregate> EntityStore<T> {
    /// Append a record built from an already validated form
    pub fn insert(&mut self, form: T::Form) -> &T {
        self.high_water += 1;
        let id = T::Id::new(self.high_water);
        self.items.push(T::from_form(id, form));
        debug!("{}: created id {}", T::collection_name(), id.value());
        &self.items[self.items.len() - 1]
    }

    /// Validate raw values and append a new record
    pub fn create(&mut self, values: &FormValues) -> Result<&T, StoreError> {
        let form = T::Form::parse(values)?;
        Ok(self.insert(form))
    }

    /// Replace the form fields of an existing record in place
    pub fn replace(&mut self, id: T::Id, form: T::Form) -> Result<&T, StoreError> {
        let item = self.get_mut(id)?;
        item.apply_form(form);
        debug!("{}: updated id {}", T::collection_name(), id.value());
        Ok(&*item)
    }

    /// Validate raw values and update the record with `id`.
    ///
    /// Validation runs first, so invalid input is reported even for a missing id.
    pub fn update(&mut self, id: T::Id, values: &FormValues) -> Result<&T, StoreError> {
        let form = T::Form::parse(values)?;
        self.replace(id, form)
    }

    /// Raw values of an existing record, for pre-filling an edit form
    pub fn form_values(&self, id: T::Id) -> Option<FormValues> {
        self.get(id).map(|item| item.to_form().to_values())
    }
}
