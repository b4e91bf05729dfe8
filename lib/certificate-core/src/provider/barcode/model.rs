#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Barcode {
    /// Rendered barcode image
    pub image: Vec<u8>,
    /// Encoded payload carried by the image, e.g. `HC1:...`
    pub payload: String,
}
