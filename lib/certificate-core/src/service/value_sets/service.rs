use super::ValueSetsService;
use super::dto::ValueSetsResponseDTO;

impl ValueSetsService {
    /// Lists the configured reference data in configuration order.
    pub fn get_value_sets(&self) -> ValueSetsResponseDTO {
        self.value_sets.as_ref().into()
    }
}
