use near_sdk::json_types::U128;
use near_sdk::{AccountId, ext_contract};

#[ext_contract(ext_ft)]
pub trait ExtFungibleToken {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}
