//! Record traits.

pub mod storable;
