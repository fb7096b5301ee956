pub use alignment::Alignment;
pub use op::Op;
pub use step::Step;

mod alignment;
mod op;
mod step;

/// Gap symbol of the aligned rows.
pub const GAP: u8 = b'-';

/// Removes gap symbols from an aligned row.
pub fn ungap(row: &[u8]) -> Vec<u8> {
    row.iter().copied().filter(|x| *x != GAP).collect()
}
