/// Errors reported by [`ChainedHashTable`](crate::ChainedHashTable).
///
/// Every failure is reported synchronously to the caller; the table never
/// retries and is left exactly as it was before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The table was constructed with a capacity of zero.
    #[error("capacity should be a positive integer, got {capacity}")]
    InvalidArgument {
        /// The rejected capacity.
        capacity: usize,
    },
    /// [`insert`](crate::ChainedHashTable::insert) was called with a key that
    /// is already present.
    #[error("key already exists")]
    DuplicateKey,
    /// [`get`](crate::ChainedHashTable::get) was called with a key that is not
    /// present.
    #[error("key not found")]
    KeyNotFound,
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidArgument { capacity: 0 }.to_string(),
            "capacity should be a positive integer, got 0"
        );
        assert_eq!(Error::DuplicateKey.to_string(), "key already exists");
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
    }

    #[test]
    fn is_core_error() {
        fn assert_error<E: core::error::Error>(_: &E) {}
        assert_error(&Error::KeyNotFound);
    }
}
