//! String forms of the event kinds, as stored by the persistence layer.

pub const EVENT_KIND_BUY: &str = "BUY";
pub const EVENT_KIND_SELL: &str = "SELL";
pub const EVENT_KIND_CASH_DIVIDEND: &str = "CASH_DIVIDEND";
pub const EVENT_KIND_INTEREST_ON_CAPITAL: &str = "INTEREST_ON_CAPITAL";
pub const EVENT_KIND_STOCK_BONUS: &str = "STOCK_BONUS";
pub const EVENT_KIND_SPLIT: &str = "SPLIT";
pub const EVENT_KIND_REVERSE_SPLIT: &str = "REVERSE_SPLIT";
