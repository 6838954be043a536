multiversx_sc::imports!();

use crate::types::TreasuryBucket;

// ============================================================
// Treasury Ledger — per-bucket deposits, cumulative withdrawals
// ============================================================

#[multiversx_sc::module]
pub trait TreasuryModule {
    /// Resolves a deposit tag to a bucket. Unrecognized tags fall
    /// into the operational bucket; no rejection.
    fn bucket_from_tag(&self, tag: &ManagedBuffer) -> TreasuryBucket {
        if tag == &ManagedBuffer::new_from_bytes(b"high_conviction") {
            TreasuryBucket::HighConviction
        } else if tag == &ManagedBuffer::new_from_bytes(b"experimental") {
            TreasuryBucket::Experimental
        } else {
            TreasuryBucket::Operational
        }
    }

    fn credit_bucket(&self, bucket: TreasuryBucket, amount: &BigUint) {
        self.bucket_balance(bucket).update(|b| *b += amount);
    }

    /// Sum of all bucket deposits minus cumulative withdrawals.
    /// Sizes quorum at proposal creation and gates execution.
    fn spendable_balance(&self) -> BigUint {
        let mut total = self.bucket_balance(TreasuryBucket::HighConviction).get();
        total += self.bucket_balance(TreasuryBucket::Experimental).get();
        total += self.bucket_balance(TreasuryBucket::Operational).get();
        total - self.total_withdrawn().get()
    }

    /// Debits the ledger. The caller performs the transfer in the same
    /// transaction; the VM reverts both together on failure.
    fn record_withdrawal(&self, amount: &BigUint) {
        self.total_withdrawn().update(|w| *w += amount);
    }

    // ── Events ──

    #[event("treasuryDeposited")]
    fn treasury_deposited_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] bucket: TreasuryBucket,
        amount: &BigUint,
    );

    // ── Storage ──

    #[storage_mapper("bucketBalance")]
    fn bucket_balance(&self, bucket: TreasuryBucket) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalWithdrawn")]
    fn total_withdrawn(&self) -> SingleValueMapper<BigUint>;
}
