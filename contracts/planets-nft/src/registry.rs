use crate::*;

impl Contract {
    /// Called exactly once per assignment, atomically with it.
    pub(crate) fn mint_token(&mut self, owner: &AccountId, token_id: u64) -> Result<(), MintError> {
        if self.owner_by_id.contains_key(&token_id) {
            return Err(MintError::InternalError(format!(
                "Token {} is already minted",
                token_id
            )));
        }
        self.owner_by_id.insert(token_id, owner.clone());
        let balance = self.balances.get(owner).copied().unwrap_or(0);
        self.balances.insert(owner.clone(), balance + 1);
        self.total_minted = self
            .total_minted
            .checked_add(1)
            .ok_or_else(|| MintError::InternalError("Mint counter overflow".into()))?;
        events::nep171::emit_mint(owner.as_str(), &[token_id.to_string()], None);
        Ok(())
    }
}

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn burn(&mut self, token_id: u64) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.check_not_paused()?;

        let owner = self
            .owner_by_id
            .remove(&token_id)
            .ok_or_else(MintError::token_not_found)?;
        let balance = self.balances.get(&owner).copied().unwrap_or(0);
        if balance <= 1 {
            self.balances.remove(&owner);
        } else {
            self.balances.insert(owner.clone(), balance - 1);
        }
        self.burned.insert(token_id);
        self.total_burned = self
            .total_burned
            .checked_add(1)
            .ok_or_else(|| MintError::InternalError("Burn counter overflow".into()))?;

        events::nep171::emit_burn(
            owner.as_str(),
            &[token_id.to_string()],
            Some(self.owner_id.as_str()),
        );
        Ok(())
    }

    pub fn balance_of(&self, account_id: AccountId) -> u64 {
        self.balances.get(&account_id).copied().unwrap_or(0)
    }

    pub fn owner_of(&self, token_id: u64) -> Option<&AccountId> {
        self.owner_by_id.get(&token_id)
    }

    /// Count of live (minted, unburned) tokens.
    pub fn total_supply(&self) -> u64 {
        self.owner_by_id.len() as u64
    }
}
