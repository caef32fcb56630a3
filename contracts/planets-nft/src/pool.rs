use crate::*;

impl Contract {
    /// Removes and returns the identifier at `index`, swapping the last
    /// element into its place and fixing the reverse lookup.
    pub(crate) fn reserve_at(&mut self, index: u32) -> Result<u64, MintError> {
        if self.pool.is_empty() {
            return Err(MintError::pool_exhausted());
        }
        let id = self.pool.swap_remove(index);
        self.pool_index.remove(&id);
        if let Some(&moved) = self.pool.get(index) {
            self.pool_index.insert(moved, index);
        }
        Ok(id)
    }

    /// Removes a specific identifier by value via the reverse lookup.
    pub(crate) fn reserve_exact(&mut self, id: u64) -> Result<u64, MintError> {
        let index = *self
            .pool_index
            .get(&id)
            .ok_or_else(MintError::pool_exhausted)?;
        self.reserve_at(index)
    }

    pub(crate) fn push_to_pool(&mut self, id: u64) {
        let index = self.pool.len();
        self.pool.push(id);
        self.pool_index.insert(id, index);
    }
}

#[near]
impl Contract {
    /// Seeds the identifier pool in bounded chunks (`0..max_supply` overall).
    /// Returns the count of identifiers still unseeded.
    #[payable]
    #[handle_result]
    pub fn init_token_pool(&mut self, limit: Option<u32>) -> Result<U64, MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let chunk = limit.unwrap_or(DEFAULT_SEED_CHUNK);
        if chunk == 0 {
            return Err(MintError::InvalidInput("Seed chunk must be at least 1".into()));
        }
        if self.next_seed_id >= self.max_supply {
            return Err(MintError::InvalidState("Pool is already fully seeded".into()));
        }

        let from = self.next_seed_id;
        let to = (from + chunk as u64).min(self.max_supply);
        for id in from..to {
            self.push_to_pool(id);
        }
        self.next_seed_id = to;

        events::emit_pool_seeded(&self.owner_id, from, to, self.pool.len());
        Ok(U64(self.max_supply - self.next_seed_id))
    }

    /// Returns previously burned identifiers to the pool. Only available
    /// under the `recycle_burned` policy; identifiers that were never
    /// assigned or are still pooled are always rejected.
    #[payable]
    #[handle_result]
    pub fn replenish_pool(&mut self, token_ids: Vec<u64>) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if token_ids.is_empty() {
            return Err(MintError::InvalidInput(
                "Replenish must name at least one identifier".into(),
            ));
        }
        if !self.recycle_burned {
            return Err(MintError::InvalidState(
                "Identifier recycling is disabled by policy".into(),
            ));
        }

        for &id in &token_ids {
            if self.pool_index.contains_key(&id) {
                return Err(MintError::InvalidState(format!(
                    "Identifier {} is already in the pool",
                    id
                )));
            }
            if !self.assigned.contains(&id) {
                return Err(MintError::InvalidInput(format!(
                    "Identifier {} was never assigned",
                    id
                )));
            }
            if !self.burned.contains(&id) {
                return Err(MintError::InvalidState(format!(
                    "Identifier {} is not burned",
                    id
                )));
            }
            self.burned.remove(&id);
            self.assigned.remove(&id);
            self.total_burned = self
                .total_burned
                .checked_sub(1)
                .ok_or_else(|| MintError::InternalError("Burn counter underflow".into()))?;
            self.push_to_pool(id);
        }

        let ids: Vec<String> = token_ids.iter().map(|id| id.to_string()).collect();
        events::emit_pool_replenished(&self.owner_id, &ids, self.pool.len());
        Ok(())
    }
}
