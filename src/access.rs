multiversx_sc::imports!();

use crate::types::Role;

// ============================================================
// Access Gate — role sets consulted before privileged transitions
// ============================================================

#[multiversx_sc::module]
pub trait AccessModule {
    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(
            self.role_members(role).contains(&caller),
            "Caller lacks required role"
        );
    }

    /// Bootstrap path used by init; no Admin check.
    fn grant_role_unchecked(&self, role: Role, account: &ManagedAddress) {
        self.role_members(role).insert(account.clone());
        self.role_granted_event(role, account);
    }

    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::Admin);
        self.grant_role_unchecked(role, &account);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::Admin);
        self.role_members(role).swap_remove(&account);
        self.role_revoked_event(role, &account);
    }

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: ManagedAddress) -> bool {
        self.role_members(role).contains(&account)
    }

    // ── Events ──

    #[event("roleGranted")]
    fn role_granted_event(&self, #[indexed] role: Role, #[indexed] account: &ManagedAddress);

    #[event("roleRevoked")]
    fn role_revoked_event(&self, #[indexed] role: Role, #[indexed] account: &ManagedAddress);

    // ── Storage ──

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;
}
