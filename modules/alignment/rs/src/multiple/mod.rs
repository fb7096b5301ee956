pub use alignment::MultipleAlignment;
pub use config::Config;
pub use progressive::Progressive;

mod alignment;
mod config;
pub mod consensus;
mod progressive;
