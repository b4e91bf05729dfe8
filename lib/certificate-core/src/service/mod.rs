pub mod certificate_generation;
pub mod error;
pub mod value_sets;

#[cfg(test)]
pub(crate) mod test_utilities;
