#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod lifecycle;
pub mod membership;
pub mod treasury;
pub mod types;

use lifecycle::GRACE_PERIOD;
use types::{Proposal, ProposalKind, ProposalState, Role, TreasuryBucket, VoteChoice, VoteRecord};

// ============================================================
// Constants
// ============================================================

/// Quorum: total cast votes must reach this percentage of the
/// spendable treasury, snapshotted at proposal creation.
const QUORUM_PERCENTAGE: u64 = 4;

/// Blocks between creation and the start of the voting window.
const VOTING_DELAY_BLOCKS: u64 = 1;

/// Length of the voting window in blocks (~1 day at 6s blocks).
const VOTING_PERIOD_BLOCKS: u64 = 14_400;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundGovernance:
    treasury::TreasuryModule
    + membership::MembershipModule
    + lifecycle::LifecycleModule
    + access::AccessModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes Admin and can reshape role holders
    /// afterwards via grantRole/revokeRole.
    #[init]
    fn init(
        &self,
        min_proposal_stake: BigUint,
        executor: ManagedAddress,
        guardian: ManagedAddress,
    ) {
        self.min_proposal_stake().set(&min_proposal_stake);

        let deployer = self.blockchain().get_caller();
        self.grant_role_unchecked(Role::Admin, &deployer);
        self.grant_role_unchecked(Role::Executor, &executor);
        self.grant_role_unchecked(Role::Guardian, &guardian);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: depositToTreasury
    // Credits the named bucket and the caller's stake atomically.
    // ========================================================

    #[endpoint(depositToTreasury)]
    #[payable("EGLD")]
    fn deposit_to_treasury(&self, bucket_tag: ManagedBuffer) -> BigUint {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "Deposit amount must be positive");

        let bucket = self.bucket_from_tag(&bucket_tag);
        self.credit_bucket(bucket, &payment);
        let new_stake = self.record_deposit(&caller, &payment);

        self.treasury_deposited_event(&caller, bucket, &payment);
        new_stake
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Stake-gated. Quorum and approval bar are frozen here.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        recipient: ManagedAddress,
        amount: BigUint,
        description: ManagedBuffer,
        kind: ProposalKind,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            self.stake(&caller).get() >= self.min_proposal_stake().get(),
            "Below minimum proposal stake"
        );
        require!(!recipient.is_zero(), "Invalid recipient");
        require!(amount > 0u64, "Amount must be positive");
        require!(!description.is_empty(), "Empty description");

        let proposal_id = self.proposal_count().get();
        let current_block = self.blockchain().get_block_nonce();
        let start_block = current_block + VOTING_DELAY_BLOCKS;
        let end_block = start_block + VOTING_PERIOD_BLOCKS;
        let quorum_required = self.spendable_balance() * QUORUM_PERCENTAGE / 100u64;

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            recipient,
            amount,
            description: description.clone(),
            kind,
            start_block,
            end_block,
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            abstain_votes: BigUint::zero(),
            eta: 0,
            canceled: false,
            executed: false,
            quorum_required,
            approval_threshold: kind.approval_threshold(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, &caller, kind, &description);
        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One-shot per (proposal, member), weighted by current power.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, choice: VoteChoice) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_existing_proposal(proposal_id);
        require!(
            self.vote_record(proposal_id, &caller).is_empty(),
            "Already voted"
        );

        let current_block = self.blockchain().get_block_nonce();
        require!(
            current_block >= proposal.start_block,
            "Voting has not started"
        );
        require!(current_block < proposal.end_block, "Voting has ended");

        let weight = self.voting_power(&caller);
        require!(weight > 0u64, "No voting power");

        match choice {
            VoteChoice::For => proposal.for_votes += &weight,
            VoteChoice::Against => proposal.against_votes += &weight,
            VoteChoice::Abstain => proposal.abstain_votes += &weight,
        }
        self.vote_record(proposal_id, &caller).set(&VoteRecord {
            choice,
            weight: weight.clone(),
        });
        self.proposals(proposal_id).set(&proposal);

        self.vote_cast_event(proposal_id, &caller, choice, &weight);
    }

    // ========================================================
    // ENDPOINT: delegate
    // Overwrite semantics. Delegating zeroes the caller's own power
    // without forwarding it; self-delegation does not restore it.
    // ========================================================

    #[endpoint(delegate)]
    fn delegate(&self, target: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(!target.is_zero(), "Invalid delegate target");
        require!(self.stake(&caller).get() > 0u64, "No stake to delegate");

        self.delegatee(&caller).set(&target);
        self.delegation_changed_event(&caller, &target);
    }

    // ========================================================
    // ENDPOINT: queueProposal
    // Quorum is checked before approval: a zero-vote tally can pass
    // quorum only when the snapshot truncated to 0, and an empty
    // tally never meets approval.
    // ========================================================

    #[endpoint(queueProposal)]
    fn queue_proposal(&self, proposal_id: u64) {
        self.require_role(Role::Executor);

        let mut proposal = self.require_existing_proposal(proposal_id);
        require!(!proposal.canceled, "Proposal was canceled");

        let current_block = self.blockchain().get_block_nonce();
        require!(
            current_block > proposal.end_block,
            "Voting period has not ended"
        );
        require!(proposal.eta == 0, "Proposal already queued");

        let total_votes =
            &proposal.for_votes + &proposal.against_votes + &proposal.abstain_votes;
        require!(total_votes >= proposal.quorum_required, "Quorum not reached");
        require!(total_votes > 0u64, "Approval threshold not met");
        let approval = &proposal.for_votes * 100u64 / &total_votes;
        require!(
            approval >= proposal.approval_threshold,
            "Approval threshold not met"
        );

        let eta = self.blockchain().get_block_timestamp() + proposal.kind.timelock_delay();
        proposal.eta = eta;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_queued_event(proposal_id, eta);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // The executed flag and ledger debit are committed before the
    // transfer; the VM reverts all of it if the transfer fails.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        self.require_role(Role::Executor);

        let mut proposal = self.require_existing_proposal(proposal_id);
        require!(proposal.eta != 0, "Proposal is not queued");
        require!(!proposal.executed, "Proposal already executed");
        require!(!proposal.canceled, "Proposal was canceled");

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.eta, "Time-lock has not elapsed");
        require!(now < proposal.eta + GRACE_PERIOD, "Proposal has expired");
        require!(
            self.spendable_balance() >= proposal.amount,
            "Insufficient spendable balance"
        );

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);
        self.record_withdrawal(&proposal.amount);

        self.send().direct_egld(&proposal.recipient, &proposal.amount);
        self.proposal_executed_event(proposal_id, &proposal.recipient, &proposal.amount);
    }

    // ========================================================
    // ENDPOINT: cancelProposal
    // Guardian-only; anything not yet executed can be canceled,
    // idempotently.
    // ========================================================

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self, proposal_id: u64) {
        self.require_role(Role::Guardian);

        let mut proposal = self.require_existing_proposal(proposal_id);
        require!(!proposal.executed, "Cannot cancel an executed proposal");

        proposal.canceled = true;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_canceled_event(proposal_id);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: u64) -> ProposalState {
        let proposal = self.require_existing_proposal(proposal_id);
        self.proposal_state(&proposal)
    }

    #[view(getVotingPower)]
    fn get_voting_power(&self, account: ManagedAddress) -> BigUint {
        self.voting_power(&account)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_existing_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let end = core::cmp::min(from.saturating_add(count), total);
        for proposal_id in from..end {
            result.push(self.proposals(proposal_id).get());
        }
        result
    }

    #[view(getStake)]
    fn get_stake(&self, account: ManagedAddress) -> BigUint {
        self.stake(&account).get()
    }

    #[view(getSpendableBalance)]
    fn get_spendable_balance(&self) -> BigUint {
        self.spendable_balance()
    }

    #[view(getBucketBalance)]
    fn get_bucket_balance(&self, bucket: TreasuryBucket) -> BigUint {
        self.bucket_balance(bucket).get()
    }

    #[view(getTotalWithdrawn)]
    fn get_total_withdrawn(&self) -> BigUint {
        self.total_withdrawn().get()
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, account: ManagedAddress) -> bool {
        !self.vote_record(proposal_id, &account).is_empty()
    }

    #[view(getMembers)]
    fn get_members(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let start = from as usize;
        let end = start + count as usize;

        for (idx, member) in self.members().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(member);
            }
        }
        result
    }

    #[view(getTreasuryStats)]
    fn get_treasury_stats(&self) -> MultiValue5<BigUint, BigUint, BigUint, BigUint, BigUint> {
        let high = self.bucket_balance(TreasuryBucket::HighConviction).get();
        let experimental = self.bucket_balance(TreasuryBucket::Experimental).get();
        let operational = self.bucket_balance(TreasuryBucket::Operational).get();
        let withdrawn = self.total_withdrawn().get();
        let spendable = self.spendable_balance();
        (high, experimental, operational, withdrawn, spendable).into()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue5<BigUint, u64, u64, u64, u64> {
        let min_stake = self.min_proposal_stake().get();
        (
            min_stake,
            QUORUM_PERCENTAGE,
            VOTING_DELAY_BLOCKS,
            VOTING_PERIOD_BLOCKS,
            GRACE_PERIOD,
        )
            .into()
    }

    // ========================================================
    // STORAGE — configuration
    // ========================================================

    #[storage_mapper("minProposalStake")]
    fn min_proposal_stake(&self) -> SingleValueMapper<BigUint>;
}
