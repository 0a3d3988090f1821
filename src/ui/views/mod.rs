pub mod practice;
pub mod result;
