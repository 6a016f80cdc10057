//! Services Layer
//!
//! Backend seams used by the controllers.

pub mod gateway;

pub use gateway::{SimulatedGateway, WriteGateway, WriteOp};
