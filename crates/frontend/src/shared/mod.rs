pub mod charts;
pub mod number_format;
