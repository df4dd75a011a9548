/*!
cycles.rs - Cycle timing helpers for the 6502 CPU core.

Base cycle counts live in the instruction table. This module holds the
dynamic adjustments applied on top of them:
  - +1 when the addressing stage crossed a page AND the handler allows it
    (reads only; stores and RMW never pay it because their base already
    includes the fix-up cycle)
  - +1 for a taken branch, +1 more when the branch target is on another page
  - the fixed 7-cycle interrupt entry sequence
*/

/// Cycles consumed by an NMI / IRQ entry sequence.
pub(crate) const INTERRUPT_CYCLES: u32 = 7;

/// True when `a` and `b` lie on different 256-byte pages.
#[inline]
pub(crate) fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Extra cycle for an indexed read that crossed a page.
#[inline]
pub(crate) fn page_penalty(page_crossed: bool, may_add_cycle: bool) -> u32 {
    (page_crossed && may_add_cycle) as u32
}

/// Extra cycles for a taken branch from `pc` (address of the next
/// instruction) to `target`.
#[inline]
pub(crate) fn branch_taken_cycles(pc: u16, target: u16) -> u32 {
    if pages_differ(pc, target) { 2 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_needs_both_signals() {
        assert_eq!(page_penalty(true, true), 1);
        assert_eq!(page_penalty(true, false), 0);
        assert_eq!(page_penalty(false, true), 0);
    }

    #[test]
    fn branch_costs() {
        assert_eq!(branch_taken_cycles(0x8010, 0x8020), 1);
        assert_eq!(branch_taken_cycles(0x80FE, 0x8101), 2);
        assert_eq!(branch_taken_cycles(0x8100, 0x80F0), 2);
    }
}
