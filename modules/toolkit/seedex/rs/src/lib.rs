use eyre::Result;

pub use config::Config;
pub use result::{ExtendedHit, Hit, Outcome};
pub use searcher::Searcher;

mod config;
mod extension;
pub mod index;
pub mod result;
mod searcher;

/// Best extended hit of the query in the target for the given word size.
pub fn best_hit(query: &[u8], target: &[u8], word_size: usize) -> Result<Outcome> {
    Searcher::new(query, Config::new(word_size, None))?.best_hit(target)
}

/// All extended hits of the query in the target, best first.
pub fn search(query: &[u8], target: &[u8], word_size: usize) -> Result<Vec<ExtendedHit>> {
    Searcher::new(query, Config::new(word_size, None))?.search(target)
}
