pub mod clock;
pub mod date_format;
pub mod standardized_name;
