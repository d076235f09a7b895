pub mod fixed_vec;
pub mod ordering;
pub mod sorted_unique;
pub mod storage;
pub mod transfer;

#[cfg(feature = "serde")]
mod serde_impls;
