//! Swap transaction construction for the Vortex pool program.

pub mod accounts;
pub mod builder;
pub mod codec;

pub use accounts::AtaResolver;
pub use builder::{SwapBuilder, estimate_native_output};
pub use codec::SwapInstructionData;
