pub mod random;

/// Source of Unique Certificate Identifiers. Implementations must not repeat
/// an identifier within the validity period of issued certificates.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait UvciGenerator: Send + Sync {
    fn generate(&self) -> String;
}
