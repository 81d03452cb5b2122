//! Thermal systems models.
//!
//! This module contains models of solar thermal collectors.

pub mod collector;
