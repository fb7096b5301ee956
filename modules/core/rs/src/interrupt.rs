use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use eyre::Result;

use crate::error::Error;

/// A shared stop flag for long running loops (DP fill, seeding, extension).
///
/// Clones observe the same flag: keep one clone, hand the other to the engine config,
/// and call [`Interrupt::raise`] from anywhere to abort the computation.
#[derive(Clone, Debug, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Fails with [`Error::Interrupted`] if the flag was raised.
    #[inline(always)]
    pub fn check(&self) -> Result<()> {
        if self.is_raised() {
            return Err(Error::Interrupted.into());
        }
        Ok(())
    }

    /// Same as [`Interrupt::check`] for an optional flag.
    #[inline(always)]
    pub fn poll(interrupt: Option<&Interrupt>) -> Result<()> {
        match interrupt {
            Some(x) => x.check(),
            None => Ok(()),
        }
    }
}

impl PartialEq for Interrupt {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.flag, &other.flag)
    }
}

impl Eq for Interrupt {}
