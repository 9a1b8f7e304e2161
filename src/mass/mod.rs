/// Conversion between charge states (m/z convolution)
pub mod convert;
