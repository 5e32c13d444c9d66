//! Single-slot interrupt latch.
//!
//! At most one interrupt is pending. A new request replaces the latched one
//! only if it has strictly higher priority (RESET > NMI > IRQ); an empty latch
//! accepts anything.

/// Interrupt waiting to be serviced at the next instruction boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingInterrupt {
    #[default]
    None,
    Reset,
    Nmi,
    Irq,
}

impl PendingInterrupt {
    const fn priority(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Irq => 1,
            Self::Nmi => 2,
            Self::Reset => 3,
        }
    }

    /// Latch state after `incoming` is requested on top of `self`.
    #[must_use]
    pub const fn request(self, incoming: PendingInterrupt) -> PendingInterrupt {
        if incoming.priority() > self.priority() {
            incoming
        } else {
            self
        }
    }

    pub const fn is_pending(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::PendingInterrupt::{self, *};

    #[test]
    fn empty_latch_takes_anything() {
        for i in [Reset, Nmi, Irq] {
            assert_eq!(PendingInterrupt::None.request(i), i);
        }
    }

    #[test]
    fn higher_priority_replaces_lower() {
        assert_eq!(Irq.request(Nmi), Nmi);
        assert_eq!(Irq.request(Reset), Reset);
        assert_eq!(Nmi.request(Reset), Reset);
    }

    #[test]
    fn lower_or_equal_priority_is_dropped() {
        assert_eq!(Nmi.request(Irq), Nmi);
        assert_eq!(Reset.request(Nmi), Reset);
        assert_eq!(Reset.request(Irq), Reset);
        assert_eq!(Irq.request(Irq), Irq);
        assert_eq!(Nmi.request(PendingInterrupt::None), Nmi);
    }
}
