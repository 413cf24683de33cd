pub const ERR_INSUFFICIENT_CONTRIBUTION: &str =
    "You need to spend more EGLD! Minimum contribution is 50 USD";
pub const ERR_NOT_OWNER: &str = "FundMe__NotOwner";
pub const ERR_ORACLE_UNAVAILABLE: &str = "Price feed returned no valid rate";
pub const ERR_INDEX_OUT_OF_RANGE: &str = "Funder index out of range";
pub const ERR_INVALID_PRICE_FEED: &str = "Price feed must be a smart contract";
