pub mod multiple;
pub mod pairwise;
pub mod scoring;
