//! Issuance core for digital COVID certificates.
//!
//! The crate validates certificate requests, maps them into the compact QR
//! payload and the richer PDF model, and drives the external barcode and PDF
//! providers. See [`CertificateCoreBuilder`] for wiring.

use std::sync::Arc;

use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::config::core_config::CoreConfig;
use crate::model::value_set::ValueSets;
use crate::provider::barcode::BarcodeService;
use crate::provider::pdf::PdfService;
use crate::provider::uvci::UvciGenerator;
use crate::provider::uvci::random::RandomUvciGenerator;
use crate::service::certificate_generation::CertificateGenerationService;
use crate::service::value_sets::ValueSetsService;
use crate::util::clock::{Clock, DefaultClock};

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod util;

#[derive(Debug, Error)]
pub enum CoreInitError {
    #[error("Missing provider: `{0}`")]
    MissingProvider(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigValidationError),
}

#[derive(Clone)]
pub struct CertificateCore {
    pub certificate_generation_service: CertificateGenerationService,
    pub value_sets_service: ValueSetsService,
    config: Arc<CoreConfig>,
}

impl CertificateCore {
    pub fn get_config(&self) -> Arc<CoreConfig> {
        self.config.clone()
    }
}

pub struct CertificateCoreBuilder {
    config: CoreConfig,
    barcode_service: Option<Arc<dyn BarcodeService>>,
    pdf_service: Option<Arc<dyn PdfService>>,
    uvci_generator: Option<Arc<dyn UvciGenerator>>,
    clock: Option<Arc<dyn Clock>>,
}

impl CertificateCoreBuilder {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            barcode_service: None,
            pdf_service: None,
            uvci_generator: None,
            clock: None,
        }
    }

    pub fn with_barcode_service(mut self, barcode_service: Arc<dyn BarcodeService>) -> Self {
        self.barcode_service = Some(barcode_service);
        self
    }

    pub fn with_pdf_service(mut self, pdf_service: Arc<dyn PdfService>) -> Self {
        self.pdf_service = Some(pdf_service);
        self
    }

    /// Replaces the default random UVCI generator.
    pub fn with_uvci_generator(mut self, uvci_generator: Arc<dyn UvciGenerator>) -> Self {
        self.uvci_generator = Some(uvci_generator);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<CertificateCore, CoreInitError> {
        self.config.validate()?;

        let value_sets = Arc::new(ValueSets::try_from(&self.config.value_sets)?);
        let config = Arc::new(self.config);

        let barcode_service = self
            .barcode_service
            .ok_or(CoreInitError::MissingProvider("barcode"))?;
        let pdf_service = self
            .pdf_service
            .ok_or(CoreInitError::MissingProvider("pdf"))?;
        let uvci_generator = self.uvci_generator.unwrap_or_else(|| {
            Arc::new(RandomUvciGenerator::new(&config.issuer.uvci))
        });
        let clock = self.clock.unwrap_or_else(|| Arc::new(DefaultClock));

        tracing::info!(
            countries = value_sets.countries().count(),
            vaccines = value_sets.vaccines().count(),
            test_types = value_sets.test_types().count(),
            "Certificate core initialized"
        );

        Ok(CertificateCore {
            certificate_generation_service: CertificateGenerationService::new(
                barcode_service,
                pdf_service,
                uvci_generator,
                clock,
                value_sets.clone(),
                config.clone(),
            ),
            value_sets_service: ValueSetsService::new(value_sets),
            config,
        })
    }
}
