pub use alignment::{Alignment, Op, Step};
pub use config::{Config, Mode};
pub use dp::{Direction, Grid, Matrices, Trace};
pub use engine::Aligner;

pub mod alignment;
mod config;
pub mod dp;
mod engine;
mod traceback;
