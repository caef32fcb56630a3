use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct NftContractMetadata {
    pub name: String,
    pub symbol: String,
    pub base_uri: Option<String>,
}

impl Default for NftContractMetadata {
    fn default() -> Self {
        Self {
            name: "PLANET".to_string(),
            symbol: "PLN".to_string(),
            base_uri: None,
        }
    }
}

#[near]
impl Contract {
    #[init]
    pub fn new(
        owner_id: AccountId,
        max_supply: u64,
        max_batch_size: u32,
        contract_metadata: Option<NftContractMetadata>,
    ) -> Self {
        assert!(max_batch_size >= 1, "max_batch_size must be at least 1");
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            paused: false,
            max_supply,
            max_batch_size,
            oracle_id: None,
            processor_id: None,
            giveaway_id: None,
            giveaway_remaining: 0,
            pool: Vector::new(StorageKey::Pool),
            pool_index: LookupMap::new(StorageKey::PoolIndex),
            next_seed_id: 0,
            assigned: LookupSet::new(StorageKey::Assigned),
            burned: LookupSet::new(StorageKey::Burned),
            next_request_id: 0,
            next_unresolved: 0,
            pending: LookupMap::new(StorageKey::Pending),
            assignments: LookupMap::new(StorageKey::Assignments),
            owner_by_id: IterableMap::new(StorageKey::OwnerById),
            balances: LookupMap::new(StorageKey::Balances),
            total_minted: 0,
            total_burned: 0,
            default_royalty: None,
            token_royalty: LookupMap::new(StorageKey::TokenRoyalty),
            recycle_burned: false,
            royalty_self_service: true,
            random_nonce: 0,
            contract_metadata: contract_metadata.unwrap_or_default(),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MintError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn pause(&mut self) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if self.paused {
            return Err(MintError::InvalidState("Contract is already paused".into()));
        }
        self.paused = true;
        events::emit_paused(&self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn unpause(&mut self) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if !self.paused {
            return Err(MintError::InvalidState("Contract is not paused".into()));
        }
        self.paused = false;
        events::emit_unpaused(&self.owner_id);
        Ok(())
    }

    /// Supply config is frozen once seeding or allocation has begun.
    #[payable]
    #[handle_result]
    pub fn set_supply_config(
        &mut self,
        max_supply: u64,
        max_batch_size: u32,
    ) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if max_batch_size == 0 {
            return Err(MintError::InvalidInput(
                "max_batch_size must be at least 1".into(),
            ));
        }
        if self.next_seed_id > 0 || self.total_minted > 0 || self.pending_count() > 0 {
            return Err(MintError::InvalidState(
                "Supply config is frozen once allocation has begun".into(),
            ));
        }
        self.max_supply = max_supply;
        self.max_batch_size = max_batch_size;
        events::emit_supply_config_set(&self.owner_id, max_supply, max_batch_size);
        Ok(())
    }

    /// Set (or clear) the randomness oracle. While set, batches resolve only
    /// through `fulfill_random_words` from this account.
    #[payable]
    #[handle_result]
    pub fn set_oracle(&mut self, oracle_id: Option<AccountId>) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.oracle_id = oracle_id;
        events::emit_oracle_set(&self.owner_id, self.oracle_id.as_ref());
        Ok(())
    }

    /// Set (or clear) the designated batch processor. `None` lets anyone
    /// trigger processing.
    #[payable]
    #[handle_result]
    pub fn set_processor(&mut self, processor_id: Option<AccountId>) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.processor_id = processor_id;
        events::emit_processor_set(&self.owner_id, self.processor_id.as_ref());
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_mint_policy(
        &mut self,
        recycle_burned: Option<bool>,
        royalty_self_service: Option<bool>,
    ) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if let Some(recycle) = recycle_burned {
            self.recycle_burned = recycle;
        }
        if let Some(self_service) = royalty_self_service {
            self.royalty_self_service = self_service;
        }
        events::emit_mint_policy_set(&self.owner_id, self.recycle_burned, self.royalty_self_service);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_contract_metadata(
        &mut self,
        name: Option<String>,
        symbol: Option<String>,
        base_uri: Option<Option<String>>,
    ) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if let Some(n) = name {
            self.contract_metadata.name = n;
        }
        if let Some(s) = symbol {
            self.contract_metadata.symbol = s;
        }
        if let Some(uri) = base_uri {
            self.contract_metadata.base_uri = uri;
        }
        events::emit_contract_metadata_updated(
            &self.owner_id,
            &self.contract_metadata.name,
            &self.contract_metadata.symbol,
        );
        Ok(())
    }
}
