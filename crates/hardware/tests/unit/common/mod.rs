/// Logical address decomposition and physical address composition.
pub mod address_codec;

/// Geometry constants.
pub mod constants;
