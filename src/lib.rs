pub mod core;
pub mod from;
pub mod conversion;
pub mod cmp;
pub mod shift;
pub mod arith;
pub mod logic;
pub mod display;

#[cfg(test)]
pub mod proptest;

pub use crate::core::{Int, Uint, Storage, Limb, LimbT, limbs_for_size};
pub use crate::core::{Int80, Int128, Int256, Int360, Int512};
pub use crate::core::{Uint80, Uint128, Uint256, Uint360, Uint512};
