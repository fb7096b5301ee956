pub use alignkit_core_rs::num::Score;
pub use policy::{Policy, Spec};

pub mod gaps;
mod policy;
pub mod symbols;
