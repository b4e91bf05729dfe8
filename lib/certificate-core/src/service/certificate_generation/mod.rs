use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::model::value_set::ValueSets;
use crate::provider::barcode::BarcodeService;
use crate::provider::pdf::PdfService;
use crate::provider::uvci::UvciGenerator;
use crate::util::clock::Clock;

pub mod dto;
pub(crate) mod mapper;
pub mod service;
pub(crate) mod validator;

/// Issues certificates: validate, map, serialize, encode, render.
///
/// Holds only immutable, shared collaborators; cheap to clone and safe to
/// call concurrently for independent requests.
#[derive(Clone)]
pub struct CertificateGenerationService {
    barcode_service: Arc<dyn BarcodeService>,
    pdf_service: Arc<dyn PdfService>,
    uvci_generator: Arc<dyn UvciGenerator>,
    clock: Arc<dyn Clock>,
    value_sets: Arc<ValueSets>,
    config: Arc<CoreConfig>,
}

impl CertificateGenerationService {
    pub(crate) fn new(
        barcode_service: Arc<dyn BarcodeService>,
        pdf_service: Arc<dyn PdfService>,
        uvci_generator: Arc<dyn UvciGenerator>,
        clock: Arc<dyn Clock>,
        value_sets: Arc<ValueSets>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            barcode_service,
            pdf_service,
            uvci_generator,
            clock,
            value_sets,
            config,
        }
    }
}
