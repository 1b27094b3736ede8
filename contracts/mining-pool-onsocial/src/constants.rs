use near_sdk::NearToken;

pub const BASIS_POINTS: u128 = 10_000; // 100%

pub const MAX_POOL_NAME_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 1_024;
pub const MAX_METADATA_KEYS: usize = 16;
pub const MAX_METADATA_KEY_LEN: usize = 64;
pub const MAX_METADATA_VALUE_LEN: usize = 256;

// Pool-id invariant: id 0 is reserved for "no pool" in participation history.
pub const NO_POOL: u64 = 0;
pub const FIRST_POOL_ID: u64 = 1;

pub const DEFAULT_ROUND_DURATION_NS: u64 = 24 * 60 * 60 * 1_000_000_000;
pub const DEFAULT_STAKE_MULTIPLIER: u32 = 5;
pub const DEFAULT_CAPACITY_MULTIPLIER: u32 = 1;
pub const DEFAULT_MINER_CAP_DIVISOR: u32 = 1_000;
pub const DEFAULT_MIN_GOV_RATIO_BPS: u16 = 100; // 1%

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_FT_TRANSFER_TGAS: u64 = 15;
pub const GAS_PAYOUT_CALLBACK_TGAS: u64 = 10;
pub const GAS_MIGRATE_TGAS: u64 = 200;
