use crate::result::{ExtendedHit, Hit};

/// Ungapped extension of a hit in both directions.
///
/// The extension starts from the first symbol of the seed (counted as a match) and alternates
/// one forward and one backward step at a growing distance from it. A direction steps while
/// both sequences have a symbol there and the mismatches don't exceed half of the extended
/// length. The first failed step retires the direction.
pub fn extend(query: &[u8], target: &[u8], hit: Hit) -> ExtendedHit {
    let (qseed, tseed) = (*hit.query(), *hit.target());
    debug_assert!(qseed < query.len() && tseed < target.len());

    let (mut qstart, mut tstart) = (qseed, tseed);
    let (mut matches, mut mismatches, mut extended) = (1, 0, 1);
    let (mut forward, mut backward) = (true, true);

    let mut offset = 1;
    while forward || backward {
        if forward {
            let (q, t) = (qseed + offset, tseed + offset);
            if q < query.len() && t < target.len() && 2 * mismatches <= extended {
                if query[q] == target[t] {
                    matches += 1;
                } else {
                    mismatches += 1;
                }
                extended += 1;
            } else {
                forward = false;
            }
        }

        if backward {
            if offset <= qseed && offset <= tseed && 2 * mismatches <= extended {
                let (q, t) = (qseed - offset, tseed - offset);
                if query[q] == target[t] {
                    matches += 1;
                } else {
                    mismatches += 1;
                }
                extended += 1;
                (qstart, tstart) = (q, t);
            } else {
                backward = false;
            }
        }

        offset += 1;
    }

    ExtendedHit::new(qstart, tstart, extended, matches)
}
