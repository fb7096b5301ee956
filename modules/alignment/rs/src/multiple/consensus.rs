use crate::pairwise::alignment::GAP;

/// Column-wise consensus of two aligned rows: the first row symbol unless it is a gap, then the
/// second row symbol.
pub fn consensus(aligned1: &[u8], aligned2: &[u8]) -> Vec<u8> {
    debug_assert_eq!(aligned1.len(), aligned2.len());
    aligned1
        .iter()
        .zip(aligned2)
        .map(|(&a, &b)| if a != GAP { a } else { b })
        .collect()
}
