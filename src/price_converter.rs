multiversx_sc::imports!();

use crate::{errors::ERR_ORACLE_UNAVAILABLE, price_feed_proxy};

/// Fractional digits of every USD value the fund compares (wad precision).
pub const PRICE_PRECISION_DECIMALS: u32 = 18;

/// EGLD is denominated in 10^-18 units.
pub const EGLD_DECIMALS: u32 = 18;

#[multiversx_sc::module]
pub trait PriceConverterModule {
    /// USD price of one EGLD, scaled to 18 fractional digits.
    ///
    /// The feed's `latestRate` is a view; the call never writes feed storage.
    #[view(getPrice)]
    fn get_price(&self) -> BigUint {
        let price_feed_address = self.price_feed_address().get();
        let latest_rate: MultiValue2<BigUint, u8> = self
            .tx()
            .to(&price_feed_address)
            .typed(price_feed_proxy::PriceFeedProxy)
            .latest_rate()
            .returns(ReturnsResult)
            .sync_call();
        let (rate, decimals) = latest_rate.into_tuple();
        require!(rate > 0u64, ERR_ORACLE_UNAVAILABLE);

        let price = self.rescale(rate, decimals as u32, PRICE_PRECISION_DECIMALS);
        require!(price > 0u64, ERR_ORACLE_UNAVAILABLE);
        price
    }

    /// USD value (18 fractional digits) of `egld_amount`.
    #[view(getConversionRate)]
    fn get_conversion_rate(&self, egld_amount: &BigUint) -> BigUint {
        let price = self.get_price();
        (price * egld_amount) / self.ten_pow(EGLD_DECIMALS)
    }

    fn rescale(&self, value: BigUint, from_decimals: u32, to_decimals: u32) -> BigUint {
        if from_decimals <= to_decimals {
            value * self.ten_pow(to_decimals - from_decimals)
        } else {
            value / self.ten_pow(from_decimals - to_decimals)
        }
    }

    fn ten_pow(&self, exponent: u32) -> BigUint {
        BigUint::from(10u64).pow(exponent)
    }

    #[view(getPriceFeed)]
    #[storage_mapper("priceFeedAddress")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;
}
