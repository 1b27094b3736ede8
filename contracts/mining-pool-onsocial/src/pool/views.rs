use crate::*;

#[near]
impl Contract {
    pub fn get_pool(&self, pool_id: u64) -> Option<PoolInfo> {
        self.registry.get(pool_id).cloned()
    }

    pub fn get_pools_by_owner(&self, owner_id: AccountId) -> Vec<u64> {
        self.registry.pools_of(&owner_id)
    }

    pub fn get_owner_capacity(&self, owner_id: AccountId) -> OwnerCapacityView {
        let totals = self.registry.owner_totals(&owner_id);
        OwnerCapacityView {
            current_capacity: totals.capacity,
            current_stake: totals.collateral,
            max_capacity: U128(self.capacity.owner_max_capacity(&owner_id, &self.oracle)),
            pool_ids: self.registry.pools_of(&owner_id),
        }
    }
}
