/// Errors produced by core type construction.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A [`DomainList`](crate::DomainList) was built from no usable entries.
    #[error("domain list must contain at least one domain")]
    EmptyDomainList,
}
