multiversx_sc::imports!();

// ============================================================
// Membership / Stake Ledger — stake, delegation, voting power
// ============================================================

#[multiversx_sc::module]
pub trait MembershipModule {
    /// Increases a member's stake, registering them on first deposit.
    /// Returns the new stake. Stake only ever increases; there is no
    /// withdrawal path.
    fn record_deposit(&self, member: &ManagedAddress, amount: &BigUint) -> BigUint {
        self.members().insert(member.clone());
        self.stake(member).update(|s| *s += amount);
        self.stake(member).get()
    }

    /// A member with a delegatee set has zero power. The weight is not
    /// forwarded to the delegatee, and pointing at yourself does not
    /// restore it. Observed contract behavior; keep as-is.
    fn voting_power(&self, member: &ManagedAddress) -> BigUint {
        if self.delegatee(member).is_empty() {
            self.stake(member).get()
        } else {
            BigUint::zero()
        }
    }

    // ── Events ──

    #[event("delegationChanged")]
    fn delegation_changed_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] target: &ManagedAddress,
    );

    // ── Storage ──

    #[storage_mapper("stake")]
    fn stake(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Empty mapper = no delegation.
    #[storage_mapper("delegatee")]
    fn delegatee(&self, member: &ManagedAddress) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("members")]
    fn members(&self) -> UnorderedSetMapper<ManagedAddress>;
}
