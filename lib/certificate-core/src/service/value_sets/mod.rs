use std::sync::Arc;

use crate::model::value_set::ValueSets;

pub mod dto;
pub mod service;

mod mapper;

/// Read-only access to the reference data used to fill in certificates.
#[derive(Clone)]
pub struct ValueSetsService {
    value_sets: Arc<ValueSets>,
}

impl ValueSetsService {
    pub(crate) fn new(value_sets: Arc<ValueSets>) -> Self {
        Self { value_sets }
    }
}
