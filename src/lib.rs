#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// The key-value record stored in each bucket.
pub mod entry;

/// Error taxonomy shared by every fallible table operation.
pub mod error;

pub mod hash_table;

pub use entry::Entry;
pub use error::Error;
#[cfg(feature = "stats")]
pub use hash_table::ChainStats;
pub use hash_table::ChainedHashTable;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hash builder every [`ChainedHashTable`] hashes its keys with.
        ///
        /// Each table is seeded independently.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hash builder every [`ChainedHashTable`] hashes its keys with.
        ///
        /// Each table is seeded independently.
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        compile_error!("chain-hash needs either the `foldhash` or the `std` feature for hashing");
    }
}
