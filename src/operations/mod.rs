pub mod packing;
pub mod query;
