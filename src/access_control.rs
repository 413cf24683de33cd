multiversx_sc::imports!();

use crate::errors::ERR_NOT_OWNER;

/// Owner identity captured once in `init`.
///
/// Kept in its own storage key rather than relying on the VM-level contract
/// owner, which can be reassigned through the `ChangeOwnerAddress` built-in.
#[multiversx_sc::module]
pub trait AccessControlModule {
    /// Must run before any storage write in a privileged endpoint.
    fn require_owner(&self, caller: &ManagedAddress) {
        require!(caller == &self.owner().get(), ERR_NOT_OWNER);
    }

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;
}
