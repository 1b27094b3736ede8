use std::collections::BTreeMap;

use near_sdk::FunctionError;

use crate::*;

/// `msg` payload of an inbound `ft_transfer_call`.
#[near(serializers = [json])]
#[serde(tag = "action", rename_all = "snake_case")]
#[derive(Clone)]
pub enum TransferMsg {
    CreatePool {
        #[serde(flatten)]
        params: CreatePoolParams,
    },
    ExpandPool {
        pool_id: u64,
    },
    JoinPool {
        pool_id: u64,
        #[serde(default)]
        metadata: BTreeMap<String, String>,
    },
    FundRound {
        round: u64,
    },
}

impl Contract {
    pub(crate) fn handle_transfer(
        &mut self,
        sender_id: &AccountId,
        amount: u128,
        msg: &str,
    ) -> Result<(), MiningPoolError> {
        let parsed: TransferMsg = near_sdk::serde_json::from_str(msg)
            .map_err(|e| MiningPoolError::InvalidInput(format!("Invalid transfer msg: {}", e)))?;
        match parsed {
            TransferMsg::CreatePool { params } => {
                self.create_pool(sender_id, params, amount)?;
            }
            TransferMsg::ExpandPool { pool_id } => {
                self.expand_pool(sender_id, pool_id, amount)?;
            }
            TransferMsg::JoinPool { pool_id, metadata } => {
                self.join_pool(sender_id, pool_id, amount, metadata)?;
            }
            TransferMsg::FundRound { round } => {
                self.fund_round(sender_id, round, amount)?;
            }
        }
        Ok(())
    }
}

#[near]
impl Contract {
    /// Only the configured token is accepted. Any failure panics so the token contract
    /// refunds the full amount to the sender.
    pub fn ft_on_transfer(&mut self, sender_id: AccountId, amount: U128, msg: String) -> U128 {
        near_sdk::require!(
            env::predecessor_account_id() == self.token_id,
            "Only the pool token is accepted"
        );
        near_sdk::require!(amount.0 > 0, "Amount must be positive");

        if let Err(e) = self.handle_transfer(&sender_id, amount.0, &msg) {
            e.panic();
        }
        U128(0)
    }
}
