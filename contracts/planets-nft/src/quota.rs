use crate::*;

impl Contract {
    pub(crate) fn is_giveaway_actor(&self, requester: &AccountId) -> bool {
        self.giveaway_id.as_ref() == Some(requester)
    }

    /// Charges the giveaway quota at enqueue time so the giveaway actor can
    /// never queue more than their entitlement and race resolution order.
    pub(crate) fn charge_giveaway(&mut self, count: u32) -> Result<(), MintError> {
        if count > self.giveaway_remaining {
            return Err(MintError::QuotaExceeded(format!(
                "Giveaway quota has {} mints remaining, requested {}",
                self.giveaway_remaining, count
            )));
        }
        self.giveaway_remaining -= count;
        Ok(())
    }
}

#[near]
impl Contract {
    /// Replaces the giveaway address and quota atomically.
    #[payable]
    #[handle_result]
    pub fn set_giveaway(&mut self, giveaway_id: AccountId, quota: u32) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let unreserved = (self.pool.len() as u64).saturating_sub(self.pending_count());
        if quota as u64 > unreserved {
            return Err(MintError::InvalidInput(format!(
                "Quota {} exceeds the {} unreserved identifiers in the pool",
                quota, unreserved
            )));
        }
        self.giveaway_id = Some(giveaway_id.clone());
        self.giveaway_remaining = quota;
        events::emit_giveaway_set(&self.owner_id, &giveaway_id, quota);
        Ok(())
    }

    pub fn get_giveaway_address(&self) -> Option<&AccountId> {
        self.giveaway_id.as_ref()
    }

    pub fn get_giveaway_remaining(&self) -> u32 {
        self.giveaway_remaining
    }
}
