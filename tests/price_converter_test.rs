use fund_me::{errors::ERR_ORACLE_UNAVAILABLE, fund_me_proxy::FundMeProxy};
use mock_price_feed::mock_price_feed_proxy::MockPriceFeedProxy;
use multiversx_sc_scenario::imports::*;

const OWNER: TestAddress = TestAddress::new("owner");
const FUND_ME_ADDRESS: TestSCAddress = TestSCAddress::new("fund-me");
const PRICE_FEED_ADDRESS: TestSCAddress = TestSCAddress::new("price-feed");

const FUND_ME_CODE_PATH: MxscPath = MxscPath::new("output/fund-me.mxsc.json");
const PRICE_FEED_CODE_PATH: MxscPath =
    MxscPath::new("mock-price-feed/output/mock-price-feed.mxsc.json");

const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

/// `units` scaled to 18 fractional digits.
fn wad(units: u64) -> BigUint<StaticApi> {
    BigUint::<StaticApi>::from(units) * BigUint::<StaticApi>::from(10u64).pow(18)
}

fn setup(decimals: u8, answer: BigUint<StaticApi>) -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(FUND_ME_CODE_PATH, fund_me::ContractBuilder);
    world.register_contract(PRICE_FEED_CODE_PATH, mock_price_feed::ContractBuilder);
    world.account(OWNER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(MockPriceFeedProxy)
        .init(decimals, answer)
        .code(PRICE_FEED_CODE_PATH)
        .new_address(PRICE_FEED_ADDRESS)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(FundMeProxy)
        .init(PRICE_FEED_ADDRESS)
        .code(FUND_ME_CODE_PATH)
        .new_address(FUND_ME_ADDRESS)
        .run();

    world
}

fn price(world: &mut ScenarioWorld) -> BigUint<StaticApi> {
    world
        .query()
        .to(FUND_ME_ADDRESS)
        .typed(FundMeProxy)
        .get_price()
        .returns(ReturnsResult)
        .run()
}

fn conversion_rate(world: &mut ScenarioWorld, egld_amount: u64) -> BigUint<StaticApi> {
    world
        .query()
        .to(FUND_ME_ADDRESS)
        .typed(FundMeProxy)
        .get_conversion_rate(egld_amount)
        .returns(ReturnsResult)
        .run()
}

#[test]
fn test_eight_decimal_feed_is_scaled_up() {
    let mut world = setup(8, BigUint::from(200_000_000_000u64));

    assert_eq!(price(&mut world), wad(2_000));
    assert_eq!(conversion_rate(&mut world, ONE_EGLD), wad(2_000));
    assert_eq!(conversion_rate(&mut world, ONE_EGLD / 100), wad(20));
}

#[test]
fn test_eighteen_decimal_feed_is_used_as_is() {
    let mut world = setup(18, wad(2_000));

    assert_eq!(price(&mut world), wad(2_000));
    assert_eq!(conversion_rate(&mut world, ONE_EGLD / 40), wad(50));
}

#[test]
fn test_feed_with_more_than_eighteen_decimals_is_scaled_down() {
    let mut world = setup(20, wad(2_000) * BigUint::from(100u64));

    assert_eq!(price(&mut world), wad(2_000));
    assert_eq!(conversion_rate(&mut world, ONE_EGLD), wad(2_000));
}

#[test]
fn test_conversion_of_zero_is_zero() {
    let mut world = setup(8, BigUint::from(200_000_000_000u64));

    assert_eq!(conversion_rate(&mut world, 0), BigUint::zero());
}

#[test]
fn test_minimum_is_fifty_usd() {
    let mut world = setup(8, BigUint::from(200_000_000_000u64));

    world
        .query()
        .to(FUND_ME_ADDRESS)
        .typed(FundMeProxy)
        .get_minimum_usd()
        .returns(ExpectValue(wad(50)))
        .run();
}

#[test]
fn test_price_below_feed_precision_is_rejected() {
    // 1 unit at 20 decimals rounds to zero at 18 decimals
    let mut world = setup(20, BigUint::from(1u64));

    world
        .tx()
        .from(OWNER)
        .to(FUND_ME_ADDRESS)
        .typed(FundMeProxy)
        .get_price()
        .returns(ExpectError(4, ERR_ORACLE_UNAVAILABLE))
        .run();
}
