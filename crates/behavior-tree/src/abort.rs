//! Abort flags attached to composites.

use bitflags::bitflags;

bitflags! {
    /// Declares which conditional abort scans apply to a composite.
    ///
    /// - `LOWER_PRIORITY` is read by the *parent* composite: while the parent
    ///   runs a lower-priority sibling, it keeps polling this composite's first
    ///   child (which must be conditional) and re-enters this branch when the
    ///   result changes.
    /// - `SELF` is read by the composite itself: while it runs a later child,
    ///   it keeps polling its own earlier conditional children.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct AbortType: u8 {
        const LOWER_PRIORITY = 1 << 0;
        const SELF           = 1 << 1;
        const BOTH           = Self::LOWER_PRIORITY.bits() | Self::SELF.bits();
    }
}

impl AbortType {
    /// No aborts: the running child keeps running whatever happens upstream.
    pub const NONE: Self = Self::empty();
}
