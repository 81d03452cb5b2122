//! Supporting utilities shared by models.
//!
//! These modules are public because they're useful on their own, but their
//! APIs are not stable.

pub mod collector;
pub mod constraint;
pub mod diagnosis;
pub mod units;
