use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct SupplyConfigView {
    pub max_supply: U64,
    pub max_batch_size: u32,
    pub seeded: U64,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct MintPolicyView {
    pub recycle_burned: bool,
    pub royalty_self_service: bool,
}

#[near]
impl Contract {
    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pool_size(&self) -> u32 {
        self.pool.len()
    }

    pub fn get_max_supply(&self) -> U64 {
        U64(self.max_supply)
    }

    pub fn get_max_batch_size(&self) -> u32 {
        self.max_batch_size
    }

    pub fn get_supply_config(&self) -> SupplyConfigView {
        SupplyConfigView {
            max_supply: U64(self.max_supply),
            max_batch_size: self.max_batch_size,
            seeded: U64(self.next_seed_id),
        }
    }

    pub fn get_oracle(&self) -> Option<&AccountId> {
        self.oracle_id.as_ref()
    }

    pub fn get_processor(&self) -> Option<&AccountId> {
        self.processor_id.as_ref()
    }

    pub fn get_mint_policy(&self) -> MintPolicyView {
        MintPolicyView {
            recycle_burned: self.recycle_burned,
            royalty_self_service: self.royalty_self_service,
        }
    }

    pub fn get_total_minted(&self) -> U64 {
        U64(self.total_minted)
    }

    pub fn get_total_burned(&self) -> U64 {
        U64(self.total_burned)
    }

    pub fn get_contract_metadata(&self) -> &NftContractMetadata {
        &self.contract_metadata
    }
}
