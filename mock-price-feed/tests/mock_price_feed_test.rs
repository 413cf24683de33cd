use mock_price_feed::mock_price_feed_proxy::MockPriceFeedProxy;
use multiversx_sc_scenario::imports::*;

const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
const PRICE_FEED_ADDRESS: TestSCAddress = TestSCAddress::new("price-feed");
const CODE_PATH: MxscPath = MxscPath::new("output/mock-price-feed.mxsc.json");

const DECIMALS: u8 = 8;
const INITIAL_ANSWER: u64 = 200_000_000_000;

fn world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(CODE_PATH, mock_price_feed::ContractBuilder);
    world
}

fn deploy(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(MockPriceFeedProxy)
        .init(DECIMALS, INITIAL_ANSWER)
        .code(CODE_PATH)
        .new_address(PRICE_FEED_ADDRESS)
        .run();
}

#[test]
fn test_init_sets_first_round() {
    let mut world = world();
    deploy(&mut world);

    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(MockPriceFeedProxy)
        .decimals()
        .returns(ExpectValue(DECIMALS))
        .run();
    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(MockPriceFeedProxy)
        .latest_answer()
        .returns(ExpectValue(INITIAL_ANSWER))
        .run();
    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(MockPriceFeedProxy)
        .latest_round()
        .returns(ExpectValue(1u64))
        .run();
}

#[test]
fn test_latest_rate_reports_answer_and_decimals() {
    let mut world = world();
    deploy(&mut world);

    let (rate, decimals) = world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(MockPriceFeedProxy)
        .latest_rate()
        .returns(ReturnsResult)
        .run()
        .into_tuple();

    assert!(rate == INITIAL_ANSWER);
    assert_eq!(decimals, DECIMALS);
}

#[test]
fn test_update_answer_starts_new_round() {
    let mut world = world();
    deploy(&mut world);

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(PRICE_FEED_ADDRESS)
        .typed(MockPriceFeedProxy)
        .update_answer(300_000_000_000u64)
        .run();

    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(MockPriceFeedProxy)
        .latest_answer()
        .returns(ExpectValue(300_000_000_000u64))
        .run();
    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(MockPriceFeedProxy)
        .latest_round()
        .returns(ExpectValue(2u64))
        .run();
}
