use serde::Serialize;

/// Pack sizes shipped by the warehouse, largest first.
pub const PACK_SIZES: [u64; 5] = [5000, 2000, 1000, 500, 250];

/// Smallest pack. Anything left over after the greedy pass ships in one of these.
pub const SMALLEST_PACK: u64 = 250;

/// Pack used instead of the smallest one when an order falls strictly
/// between `SMALLEST_PACK` and `SPECIAL_CASE_PACK`.
pub const SPECIAL_CASE_PACK: u64 = 500;

/// `count` packs of `pack_size` items each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PackAllocation {
    #[serde(rename = "Number of Packs")]
    pub count: u64,
    #[serde(rename = "Pack Size")]
    pub pack_size: u64,
}

impl PackAllocation {
    pub fn new(pack_size: u64, count: u64) -> Self {
        Self { count, pack_size }
    }

    /// Items covered by this allocation.
    pub fn items(&self) -> u64 {
        self.pack_size * self.count
    }
}
