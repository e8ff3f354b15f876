pub mod conversion;
pub mod input;
