use crate::*;
use crate::randomness::{RandomnessSource, ScriptedWords, SeedRandomness};

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub request_id: u64,
    pub owner: AccountId,
    pub token_id: u64,
    pub resolved_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HaltReason {
    PoolExhausted,
    RandomnessUnavailable,
}

impl HaltReason {
    fn as_str(&self) -> &'static str {
        match self {
            Self::PoolExhausted => "pool_exhausted",
            Self::RandomnessUnavailable => "randomness_unavailable",
        }
    }
}

/// Committed outcome of one processing invocation. A populated `halted`
/// means the batch stopped early with the listed assignments applied and
/// the remaining requests left queued.
#[near(serializers = [json])]
#[derive(Debug)]
pub struct BatchOutcome {
    pub assignments: Vec<Assignment>,
    pub remaining_pending: U64,
    pub halted: Option<HaltReason>,
}

impl Contract {
    /// Resolves up to `max_batch_size` oldest requests in FIFO order.
    ///
    /// Each iteration either commits one request end-to-end (identifier
    /// reserved, token minted, assignment recorded, request removed) or
    /// halts before touching it, so a later retry resumes exactly at the
    /// first unresolved request and can never double-assign.
    pub(crate) fn resolve_pending(
        &mut self,
        source: &mut dyn RandomnessSource,
    ) -> Result<BatchOutcome, MintError> {
        if self.pending_count() == 0 {
            return Err(MintError::nothing_pending());
        }
        let limit = (self.max_batch_size as u64).min(self.pending_count());

        let mut assignments = Vec::new();
        let mut halted = None;
        for _ in 0..limit {
            let request_id = self.next_unresolved;
            let request = self
                .pending
                .get(&request_id)
                .cloned()
                .ok_or_else(MintError::request_not_found)?;

            if self.pool.is_empty() {
                halted = Some(HaltReason::PoolExhausted);
                break;
            }

            // Preferred identifiers are honored while still pooled and
            // consume no randomness draw; otherwise one fresh word maps to
            // an index in [0, pool_size).
            let token_id = match request
                .preferred_id
                .filter(|id| self.pool_index.contains_key(id))
            {
                Some(id) => self.reserve_exact(id)?,
                None => {
                    let word = match source.next_random() {
                        Ok(word) => word,
                        Err(_) => {
                            halted = Some(HaltReason::RandomnessUnavailable);
                            break;
                        }
                    };
                    let index = (word % self.pool.len() as u64) as u32;
                    self.reserve_at(index)?
                }
            };

            self.assigned.insert(token_id);
            self.mint_token(&request.requester, token_id)?;
            let assignment = Assignment {
                request_id,
                owner: request.requester.clone(),
                token_id,
                resolved_at: env::block_timestamp(),
            };
            self.assignments.insert(request_id, assignment.clone());
            self.pending.remove(&request_id);
            self.next_unresolved += 1;

            events::emit_mint_assigned(&request.requester, request_id, token_id);
            assignments.push(assignment);
        }

        Ok(BatchOutcome {
            assignments,
            remaining_pending: U64(self.pending_count()),
            halted,
        })
    }
}

#[near]
impl Contract {
    /// Resolves a batch using seed-derived randomness. Closed while a
    /// randomness oracle is configured; `fulfill_random_words` is the
    /// processing path in that mode.
    #[handle_result]
    pub fn process_batch(&mut self) -> Result<BatchOutcome, MintError> {
        self.check_not_paused()?;
        let caller = env::predecessor_account_id();
        self.check_processor(&caller)?;
        if self.oracle_id.is_some() {
            return Err(MintError::RandomnessUnavailable(
                "Randomness oracle configured; awaiting fulfill_random_words".into(),
            ));
        }

        let mut source = SeedRandomness::new(env::random_seed(), self.random_nonce);
        let outcome = self.resolve_pending(&mut source)?;
        self.random_nonce = source.nonce();

        events::emit_batch_processed(
            &caller,
            outcome.assignments.len() as u32,
            outcome.remaining_pending.0,
            outcome.halted.as_ref().map(HaltReason::as_str),
        );
        Ok(outcome)
    }

    /// Oracle-fed processing path: resolves a batch against the supplied
    /// words, halting with a committed prefix when they run out.
    #[handle_result]
    pub fn fulfill_random_words(&mut self, words: Vec<U64>) -> Result<BatchOutcome, MintError> {
        self.check_not_paused()?;
        let caller = env::predecessor_account_id();
        match &self.oracle_id {
            Some(oracle) if oracle == &caller => {}
            Some(_) => {
                return Err(MintError::only_owner("the randomness oracle"));
            }
            None => {
                return Err(MintError::InvalidState(
                    "No randomness oracle configured".into(),
                ));
            }
        }

        let mut source = ScriptedWords::new(words.into_iter().map(|w| w.0).collect());
        let outcome = self.resolve_pending(&mut source)?;

        events::emit_batch_processed(
            &caller,
            outcome.assignments.len() as u32,
            outcome.remaining_pending.0,
            outcome.halted.as_ref().map(HaltReason::as_str),
        );
        Ok(outcome)
    }

    pub fn get_assignment(&self, request_id: U64) -> Option<&Assignment> {
        self.assignments.get(&request_id.0)
    }
}
