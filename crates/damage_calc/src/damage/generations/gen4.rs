//! Generation 4 (Diamond/Pearl/Platinum) mechanics.

use super::GenMechanics;
use crate::damage::pipeline::{DamagePipeline, GEN4_PIPELINE};

/// Generation 4 mechanics.
///
/// Key features:
/// - Physical/Special split per move
/// - 2.0x crit multiplier (3.0x with Sniper), applied after the +2
/// - Every modifier is an exact fraction with truncation, no 4096-scale chain
///   outside of speed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gen4;

impl GenMechanics for Gen4 {
    const GEN: u8 = 4;

    fn pipeline(&self) -> &'static dyn DamagePipeline {
        &GEN4_PIPELINE
    }
}
