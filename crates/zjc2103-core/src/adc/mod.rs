pub mod config;
pub mod driver;
mod pipeline;
pub mod registers;
pub mod variant;

pub use config::RegisterConfig;
pub use driver::{AdcDriver, AdcError, InitParam};
pub use registers::{BwE, InccE, RefE, SeqE};
pub use variant::DeviceVariant;
