pub mod certificate;
pub mod person;
pub mod recovery_certificate;
pub mod test_certificate;
pub mod vaccination_certificate;
pub mod value_set;
