multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Treasury buckets — deposit destinations
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TreasuryBucket {
    HighConviction,
    Experimental,
    Operational,
}

// ============================================================
// Proposal kind — risk tier, fixes threshold and timelock
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalKind {
    HighConviction,
    ExperimentalBet,
    OperationalExpense,
}

impl ProposalKind {
    /// Percent of cast votes that must be For. Frozen into the
    /// proposal at creation.
    pub fn approval_threshold(&self) -> u64 {
        match self {
            ProposalKind::HighConviction => 75,
            ProposalKind::ExperimentalBet => 66,
            ProposalKind::OperationalExpense => 50,
        }
    }

    /// Timelock between queueing and earliest execution, in seconds.
    pub fn timelock_delay(&self) -> u64 {
        match self {
            ProposalKind::HighConviction => 604_800,    // 7 days
            ProposalKind::ExperimentalBet => 259_200,   // 3 days
            ProposalKind::OperationalExpense => 86_400, // 1 day
        }
    }
}

// ============================================================
// Proposal State — derived lifecycle, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// Voting delay running; voting not yet open.
    Pending,
    /// Voting window open.
    Active,
    /// Window closed without being queued: quorum or approval missed.
    Defeated,
    /// Passed and timelocked; eta set.
    Queued,
    /// Queued but not executed within the grace period. Terminal.
    Expired,
    /// Funds sent. Terminal.
    Executed,
    /// Guardian cancelled. Terminal.
    Canceled,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub recipient: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub description: ManagedBuffer<M>,
    pub kind: ProposalKind,
    /// First block of the voting window.
    pub start_block: u64,
    /// First block past the voting window.
    pub end_block: u64,
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub abstain_votes: BigUint<M>,
    /// Earliest execution timestamp; 0 while not queued.
    pub eta: u64,
    pub canceled: bool,
    pub executed: bool,
    /// Quorum snapshot taken at creation; later deposits do not move it.
    pub quorum_required: BigUint<M>,
    /// Approval percentage snapshot taken at creation.
    pub approval_threshold: u64,
}

// ============================================================
// Vote Record — write-once per (proposal, voter)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteChoice {
    For,
    Against,
    Abstain,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub choice: VoteChoice,
    pub weight: BigUint<M>,
}

// ============================================================
// Roles — capability tokens for privileged transitions
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Proposer,
    Executor,
    Guardian,
    Admin,
}
