use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RoyaltyEntry {
    pub receiver: AccountId,
    pub fraction_bps: u16,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RoyaltyInfoView {
    pub receiver: AccountId,
    pub amount: U128,
}

pub(crate) fn validate_fraction(fraction_bps: u16) -> Result<(), MintError> {
    if fraction_bps > MAX_ROYALTY_BPS {
        return Err(MintError::InvalidInput(format!(
            "Royalty fraction {} bps exceeds max {} bps",
            fraction_bps, MAX_ROYALTY_BPS
        )));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn effective_royalty(&self, token_id: u64) -> Option<&RoyaltyEntry> {
        self.token_royalty
            .get(&token_id)
            .or(self.default_royalty.as_ref())
    }
}

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn set_default_royalty(
        &mut self,
        receiver: AccountId,
        fraction_bps: u16,
    ) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        crate::royalties::validate_fraction(fraction_bps)?;
        self.default_royalty = Some(RoyaltyEntry {
            receiver: receiver.clone(),
            fraction_bps,
        });
        events::emit_default_royalty_set(&self.owner_id, &receiver, fraction_bps);
        Ok(())
    }

    /// Per-token override. Under the `royalty_self_service` policy the
    /// current effective receiver may re-point their own royalty; otherwise
    /// this is controller-only.
    #[payable]
    #[handle_result]
    pub fn set_token_royalty(
        &mut self,
        token_id: u64,
        receiver: AccountId,
        fraction_bps: u16,
    ) -> Result<(), MintError> {
        crate::guards::check_one_yocto()?;
        self.check_not_paused()?;
        crate::royalties::validate_fraction(fraction_bps)?;

        let caller = env::predecessor_account_id();
        if self.royalty_self_service {
            match self.effective_royalty(token_id) {
                Some(entry) if entry.receiver == caller => {}
                Some(_) => {
                    return Err(MintError::only_owner("the current royalty receiver"));
                }
                None => self.check_contract_owner(&caller)?,
            }
        } else {
            self.check_contract_owner(&caller)?;
        }

        self.token_royalty.insert(
            token_id,
            RoyaltyEntry {
                receiver: receiver.clone(),
                fraction_bps,
            },
        );
        events::emit_token_royalty_set(&caller, token_id, &receiver, fraction_bps);
        Ok(())
    }

    /// ERC-2981-shaped read: `(receiver, sale_price * fraction / 10_000)`
    /// rounding down, override-if-present else default. Available while
    /// paused; `None` when no royalty is configured.
    pub fn royalty_info(&self, token_id: u64, sale_price: U128) -> Option<RoyaltyInfoView> {
        let entry = self.effective_royalty(token_id)?;
        let amount = sale_price
            .0
            .checked_mul(entry.fraction_bps as u128)?
            / BASIS_POINTS as u128;
        Some(RoyaltyInfoView {
            receiver: entry.receiver.clone(),
            amount: U128(amount),
        })
    }
}
