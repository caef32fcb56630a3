use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), MintError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MintError::InvalidInput(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), MintError> {
        if actor_id != &self.owner_id {
            return Err(MintError::only_owner("contract owner"));
        }
        Ok(())
    }

    pub(crate) fn check_not_paused(&self) -> Result<(), MintError> {
        if self.paused {
            return Err(MintError::paused());
        }
        Ok(())
    }

    pub(crate) fn check_processor(&self, actor_id: &AccountId) -> Result<(), MintError> {
        if let Some(processor) = &self.processor_id {
            if actor_id != processor {
                return Err(MintError::only_owner("designated batch processor"));
            }
        }
        Ok(())
    }
}
