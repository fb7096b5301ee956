use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::Result;

use alignkit_core_rs::num::PrimUInt;
use alignkit_core_rs::Error;

use super::op::Op;

/// A run of identical alignment operations.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the run, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(Error::invalid_parameter("step", "length must be greater than zero").into());
        }
        Ok(Self { len, op })
    }

    /// Run-length encodes a sequence of operations.
    pub fn encode(ops: impl Iterator<Item = Op>) -> Vec<Step<Len>> {
        let mut steps: Vec<Step<Len>> = ops.map(|op| Step { len: Len::one(), op }).collect();
        Step::collapse(&mut steps);
        steps
    }

    /// Collapses adjacent steps with identical operations.
    /// If the sum of the lengths exceeds the maximum value of the step size, the step is divided accordingly.
    pub fn collapse(steps: &mut Vec<Step<Len>>) {
        if steps.is_empty() || steps.len() == 1 {
            return;
        }

        let (mut writep, mut readp) = (0, 1);

        while readp < steps.len() {
            if steps[writep].op == steps[readp].op {
                match steps[writep].len.checked_add(&steps[readp].len) {
                    Some(x) => steps[writep].len = x,
                    None => {
                        steps[readp].len =
                            steps[readp].len - (Len::max_value() - steps[writep].len);
                        debug_assert!(steps[readp].len > Len::zero());
                        steps[writep].len = Len::max_value();

                        writep += 1;
                        steps[writep] = steps[readp];
                    }
                }
            } else {
                writep += 1;
                steps[writep] = steps[readp];
            }
            readp += 1;
        }
        steps.truncate(writep + 1);
    }

    /// CIGAR-like string, e.g. `3=1X2v`.
    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // 2 symbols is an average length of a step
        // 1 is the length of the symbol
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }
}
