#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod errors;
pub mod fund_me_proxy;
pub mod ledger;
pub mod price_converter;
pub mod price_feed_proxy;

use errors::{ERR_INSUFFICIENT_CONTRIBUTION, ERR_INVALID_PRICE_FEED};
use price_converter::PRICE_PRECISION_DECIMALS;

// ============================================================
// Constants
// ============================================================

/// Smallest accepted contribution, in whole USD
const MINIMUM_USD: u64 = 50;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundMe:
    access_control::AccessControlModule
    + ledger::LedgerModule
    + price_converter::PriceConverterModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the owner. Neither the owner nor the price feed
    /// can be changed afterwards.
    #[init]
    fn init(&self, price_feed_address: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&price_feed_address),
            ERR_INVALID_PRICE_FEED
        );

        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);
        self.price_feed_address().set(&price_feed_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fund
    // Open to anyone; the payment must be worth at least MINIMUM_USD.
    // ========================================================

    #[endpoint(fund)]
    #[payable("EGLD")]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        let usd_value = self.get_conversion_rate(&payment_amount);
        require!(
            usd_value >= self.minimum_usd(),
            ERR_INSUFFICIENT_CONTRIBUTION
        );

        self.record_contribution(&caller, &payment_amount);
        self.fund_event(&caller, &payment_amount);
    }

    // ========================================================
    // ENDPOINT: withdraw / cheaperWithdraw
    // Owner drains the whole balance. Ledger state is reset before
    // the transfer, so a re-entering call sees an empty fund and a
    // failed transfer reverts the reset along with everything else.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let balance = self.held_balance();
        let funders_reset = self.reset_contributions();

        self.pay_out(&caller, &balance, funders_reset);
    }

    /// Identical outcome to `withdraw`; reads the funder registry once.
    #[endpoint(cheaperWithdraw)]
    fn cheaper_withdraw(&self) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let balance = self.held_balance();
        let funders_reset = self.reset_contributions_from_snapshot();

        self.pay_out(&caller, &balance, funders_reset);
    }

    fn pay_out(&self, owner: &ManagedAddress, amount: &BigUint, funders_reset: usize) {
        if *amount > 0u64 {
            self.send().direct_egld(owner, amount);
        }
        self.withdraw_event(owner, amount, funders_reset);
    }

    fn minimum_usd(&self) -> BigUint {
        BigUint::from(MINIMUM_USD) * BigUint::from(10u64).pow(PRICE_PRECISION_DECIMALS)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMinimumUsd)]
    fn get_minimum_usd(&self) -> BigUint {
        self.minimum_usd()
    }

    /// Held balance, registry length (duplicates included), minimum in USD.
    #[view(getFundStats)]
    fn get_fund_stats(&self) -> MultiValue3<BigUint, usize, BigUint> {
        let balance = self.held_balance();
        let funders_count = self.funders().len();
        let minimum_usd = self.minimum_usd();
        (balance, funders_count, minimum_usd).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fund")]
    fn fund_event(&self, #[indexed] funder: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
        funders_reset: usize,
    );
}
