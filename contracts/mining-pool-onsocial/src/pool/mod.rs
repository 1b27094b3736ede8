mod manage;
mod registry;
mod types;
mod views;

pub use registry::PoolRegistry;
pub use types::{CreatePoolParams, OwnerCapacityView, OwnerTotals, PoolInfo};
