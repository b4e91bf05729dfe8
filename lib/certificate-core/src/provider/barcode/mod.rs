//! Barcode encoding boundary. The implementation (CBOR/COSE signing,
//! compression, Base45, QR rendering) lives outside this crate.

use async_trait::async_trait;

use self::error::BarcodeError;
use self::model::Barcode;

pub mod error;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait BarcodeService: Send + Sync {
    /// Encodes and signs the UTF-8 JSON payload into a 2D barcode.
    async fn create_barcode(&self, contents: &str) -> Result<Barcode, BarcodeError>;
}
