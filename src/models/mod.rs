pub mod order;
pub mod pack;

pub use order::{Order, OrderResponse};
pub use pack::{PackAllocation, PACK_SIZES};
