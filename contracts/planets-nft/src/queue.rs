use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct PendingMint {
    pub requester: AccountId,
    pub preferred_id: Option<u64>,
    pub enqueued_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct PendingMintView {
    pub request_id: U64,
    pub requester: AccountId,
    pub preferred_id: Option<u64>,
    pub enqueued_at: U64,
}

#[near]
impl Contract {
    /// Queues `count` mint requests for the caller, all-or-nothing. Returns
    /// the created request ids.
    #[handle_result]
    pub fn enqueue_mint(
        &mut self,
        count: u32,
        preferred_ids: Option<Vec<u64>>,
    ) -> Result<Vec<U64>, MintError> {
        self.check_not_paused()?;
        let requester = env::predecessor_account_id();

        if count == 0 {
            return Err(MintError::InvalidInput(
                "Must request at least one mint".into(),
            ));
        }
        if count > MAX_ENQUEUE_BATCH {
            return Err(MintError::InvalidInput(format!(
                "Cannot request more than {} mints at once",
                MAX_ENQUEUE_BATCH
            )));
        }
        if let Some(ref preferred) = preferred_ids {
            if preferred.len() != count as usize {
                return Err(MintError::InvalidInput(
                    "Preferred identifiers must match the request count".into(),
                ));
            }
            for id in preferred {
                if self.assigned.contains(id) {
                    return Err(MintError::InvalidInput(format!(
                        "Preferred identifier {} is already assigned",
                        id
                    )));
                }
            }
        }

        // Identifiers still earmarked for the giveaway actor count as
        // reserved supply against public enqueues.
        let is_giveaway = self.is_giveaway_actor(&requester);
        let reserved = if is_giveaway {
            0
        } else {
            self.giveaway_remaining as u64
        };
        let available = (self.pool.len() as u64)
            .saturating_sub(self.pending_count())
            .saturating_sub(reserved);
        if count as u64 > available {
            return Err(MintError::InsufficientSupply(format!(
                "Only {} identifiers remain available for new requests",
                available
            )));
        }
        if is_giveaway {
            self.charge_giveaway(count)?;
        }

        let enqueued_at = env::block_timestamp();
        let mut request_ids = Vec::with_capacity(count as usize);
        for i in 0..count {
            let request_id = self.next_request_id;
            self.next_request_id = self
                .next_request_id
                .checked_add(1)
                .ok_or_else(|| MintError::InternalError("Request ID counter overflow".into()))?;
            let preferred_id = preferred_ids
                .as_ref()
                .and_then(|ids| ids.get(i as usize).copied());
            self.pending.insert(
                request_id,
                PendingMint {
                    requester: requester.clone(),
                    preferred_id,
                    enqueued_at,
                },
            );
            request_ids.push(U64(request_id));
        }

        let ids: Vec<String> = request_ids.iter().map(|id| id.0.to_string()).collect();
        events::emit_mint_enqueued(&requester, &ids, is_giveaway);
        Ok(request_ids)
    }

    pub fn pending_count(&self) -> u64 {
        self.next_request_id - self.next_unresolved
    }

    /// Oldest-first window over the queue without removing anything.
    pub fn get_pending(&self, from_request_id: Option<U64>, limit: Option<u32>) -> Vec<PendingMintView> {
        let from = from_request_id
            .map(|id| id.0)
            .unwrap_or(self.next_unresolved)
            .max(self.next_unresolved);
        let limit = limit.unwrap_or(DEFAULT_MAX_BATCH_SIZE) as u64;
        let to = from.saturating_add(limit).min(self.next_request_id);
        (from..to)
            .filter_map(|request_id| {
                self.pending.get(&request_id).map(|req| PendingMintView {
                    request_id: U64(request_id),
                    requester: req.requester.clone(),
                    preferred_id: req.preferred_id,
                    enqueued_at: U64(req.enqueued_at),
                })
            })
            .collect()
    }
}
