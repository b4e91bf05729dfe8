pub mod barcode;
pub mod pdf;
pub mod uvci;
