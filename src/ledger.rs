multiversx_sc::imports!();

use crate::errors::ERR_INDEX_OUT_OF_RANGE;

/// Per-funder balances plus the ordered funder registry.
///
/// Both structures change together inside one endpoint call, so
/// `sum(address_to_amount_funded) == contract balance` holds between calls.
#[multiversx_sc::module]
pub trait LedgerModule {
    /// Appends `funder` to the registry even if it is already listed.
    fn record_contribution(&self, funder: &ManagedAddress, amount: &BigUint) {
        self.address_to_amount_funded(funder)
            .update(|funded| *funded += amount);
        self.funders().push(funder);
    }

    /// Zeroes every record, re-reading the registry from storage at each step.
    /// Returns the number of registry entries reset.
    fn reset_contributions(&self) -> usize {
        let mut index = 1;
        while index <= self.funders().len() {
            let funder = self.funders().get(index);
            self.address_to_amount_funded(&funder).clear();
            index += 1;
        }

        let funders_reset = index - 1;
        self.funders().clear();
        funders_reset
    }

    /// Same end state as `reset_contributions`, but walks an in-memory
    /// snapshot of the registry.
    fn reset_contributions_from_snapshot(&self) -> usize {
        let funders: ManagedVec<ManagedAddress> = self.funders().iter().collect();
        for funder in funders.iter() {
            self.address_to_amount_funded(&funder).clear();
        }

        self.funders().clear();
        funders.len()
    }

    fn held_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// `index` is 0-based.
    #[view(getFunder)]
    fn get_funder(&self, index: usize) -> ManagedAddress {
        let funders = self.funders();
        require!(index < funders.len(), ERR_INDEX_OUT_OF_RANGE);
        funders.get(index + 1)
    }

    #[view(getFundersCount)]
    fn get_funders_count(&self) -> usize {
        self.funders().len()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getAddressToAmountFunded)]
    #[storage_mapper("addressToAmountFunded")]
    fn address_to_amount_funded(&self, funder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}
