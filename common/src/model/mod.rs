pub mod analysis;
pub mod scan;
