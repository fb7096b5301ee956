pub use error::Error;
pub use interrupt::Interrupt;

pub mod alphabet;
pub mod error;
mod interrupt;
pub mod num;
