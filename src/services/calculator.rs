//! Greedy pack selection. Allocations keep decision order and are never
//! merged, so a pack size can appear twice (751 items: 500, 250, 250).

use crate::models::pack::{PackAllocation, PACK_SIZES, SMALLEST_PACK, SPECIAL_CASE_PACK};

#[derive(Clone, Copy, Debug)]
pub struct PackCalculator {
    pack_sizes: &'static [u64],
}

impl Default for PackCalculator {
    fn default() -> Self {
        Self::new(&PACK_SIZES)
    }
}

impl PackCalculator {
    /// `pack_sizes` must be positive and sorted largest first.
    pub fn new(pack_sizes: &'static [u64]) -> Self {
        debug_assert!(pack_sizes.windows(2).all(|w| w[0] > w[1]));
        debug_assert!(pack_sizes.iter().all(|&size| size > 0));
        Self { pack_sizes }
    }

    /// Packs needed to ship `quantity` items. `quantity` must be positive;
    /// callers validate before getting here.
    pub fn calculate(&self, quantity: u64) -> Vec<PackAllocation> {
        let mut allocations = Vec::new();
        let mut remaining = quantity;

        for &pack_size in self.pack_sizes {
            let count = remaining / pack_size;
            if count == 0 {
                continue;
            }

            // Keyed on the requested quantity, not the remainder.
            if pack_size == SMALLEST_PACK && is_special_case(quantity) {
                allocations.push(PackAllocation::new(SPECIAL_CASE_PACK, 1));
                remaining = remaining.saturating_sub(SPECIAL_CASE_PACK);
            } else {
                allocations.push(PackAllocation::new(pack_size, count));
                remaining -= count * pack_size;
            }
        }

        if remaining > 0 {
            allocations.push(PackAllocation::new(SMALLEST_PACK, 1));
        }

        allocations
    }
}

fn is_special_case(quantity: u64) -> bool {
    quantity > SMALLEST_PACK && quantity < SPECIAL_CASE_PACK
}

/// Packs for `quantity` using the standard pack sizes.
pub fn calculate_packs(quantity: u64) -> Vec<PackAllocation> {
    PackCalculator::default().calculate(quantity)
}
