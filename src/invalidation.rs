use bitflags::bitflags;

bitflags! {
    /// Flags indicating what the host needs to redo for a widget
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Widget needs layout recalculation (counter text width may change)
        const NEEDS_LAYOUT = 0b01;
        /// Widget needs repainting (visual appearance changed)
        const NEEDS_PAINT  = 0b10;
    }
}

/// Pending redraw/relayout requests accumulated between host frames.
#[derive(Debug, Default)]
pub struct Invalidation {
    flags: ChangeFlags,
}

impl Invalidation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the widget be re-laid out (and repainted)
    pub fn request_layout(&mut self) {
        self.flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    /// Request that the widget be repainted (without layout)
    pub fn request_paint(&mut self) {
        self.flags |= ChangeFlags::NEEDS_PAINT;
    }

    pub fn needs_layout(&self) -> bool {
        self.flags.contains(ChangeFlags::NEEDS_LAYOUT)
    }

    pub fn needs_paint(&self) -> bool {
        self.flags.contains(ChangeFlags::NEEDS_PAINT)
    }

    /// Return the pending flags and clear them
    pub fn take(&mut self) -> ChangeFlags {
        std::mem::take(&mut self.flags)
    }
}
