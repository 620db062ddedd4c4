//! Address allocation.
//!
//! Two independent entry points: VLSM allocation of named host-count
//! requests from a base address, and equal division of a raw address range.

pub mod equal_division;
pub mod types;
pub mod vlsm;

pub use equal_division::{divide_range, Division, MIN_BLOCK_SIZE};
pub use types::{AllocationPlan, AllocationRecord, CapacityRequest};
pub use vlsm::{allocate_vlsm, sizing_order};
