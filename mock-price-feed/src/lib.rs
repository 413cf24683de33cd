#![no_std]

multiversx_sc::imports!();

pub mod mock_price_feed_proxy;

/// Price feed test double with a settable answer.
///
/// Answers are plain integers scaled by `decimals` fractional digits, so
/// `200_000_000_000` with 8 decimals reads as 2000 USD.
#[multiversx_sc::contract]
pub trait MockPriceFeed {
    #[init]
    fn init(&self, decimals: u8, initial_answer: BigUint) {
        self.decimals().set(decimals);
        self.store_answer(initial_answer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(updateAnswer)]
    fn update_answer(&self, answer: BigUint) {
        self.store_answer(answer);
    }

    fn store_answer(&self, answer: BigUint) {
        self.latest_answer().set(&answer);
        self.latest_round().update(|round| *round += 1);
        self.answer_updated_event(self.latest_round().get(), &answer);
    }

    #[view(latestRate)]
    fn latest_rate(&self) -> MultiValue2<BigUint, u8> {
        (self.latest_answer().get(), self.decimals().get()).into()
    }

    #[event("answerUpdated")]
    fn answer_updated_event(&self, #[indexed] round: u64, answer: &BigUint);

    #[view(decimals)]
    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;

    #[view(latestAnswer)]
    #[storage_mapper("latestAnswer")]
    fn latest_answer(&self) -> SingleValueMapper<BigUint>;

    #[view(latestRound)]
    #[storage_mapper("latestRound")]
    fn latest_round(&self) -> SingleValueMapper<u64>;
}
