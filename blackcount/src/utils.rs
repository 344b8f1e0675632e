pub mod imgutils;
pub mod percent;
