multiversx_sc::imports!();

use crate::types::{Proposal, ProposalKind, ProposalState, VoteChoice, VoteRecord};

/// A queued proposal not executed within this window (seconds past
/// eta) expires permanently; eta stays set, so re-queueing is
/// impossible by construction.
pub const GRACE_PERIOD: u64 = 1_209_600; // 14 days

// ============================================================
// Proposal Store + Lifecycle — storage, tallies, derived state
// ============================================================

#[multiversx_sc::module]
pub trait LifecycleModule {
    /// Lifecycle state as a pure function of stored fields and the
    /// current block nonce/timestamp. Never cached, evaluated in
    /// strict priority order.
    fn proposal_state(&self, proposal: &Proposal<Self::Api>) -> ProposalState {
        if proposal.canceled {
            return ProposalState::Canceled;
        }
        if proposal.executed {
            return ProposalState::Executed;
        }
        let current_block = self.blockchain().get_block_nonce();
        if current_block <= proposal.start_block {
            return ProposalState::Pending;
        }
        if current_block < proposal.end_block {
            return ProposalState::Active;
        }
        if proposal.eta == 0 {
            return ProposalState::Defeated;
        }
        let now = self.blockchain().get_block_timestamp();
        if now >= proposal.eta + GRACE_PERIOD {
            return ProposalState::Expired;
        }
        ProposalState::Queued
    }

    fn require_existing_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            "Proposal does not exist"
        );
        self.proposals(proposal_id).get()
    }

    // ── Events ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] kind: ProposalKind,
        description: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] choice: VoteChoice,
        weight: &BigUint,
    );

    #[event("proposalQueued")]
    fn proposal_queued_event(&self, #[indexed] proposal_id: u64, #[indexed] eta: u64);

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("proposalCanceled")]
    fn proposal_canceled_event(&self, #[indexed] proposal_id: u64);

    // ── Storage ──

    /// Dense, sequential from 0. Proposals are never deleted.
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    /// Write-once; a non-empty mapper doubles as the has-voted flag.
    #[storage_mapper("voteRecord")]
    fn vote_record(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;
}
