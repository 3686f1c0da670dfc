pub mod period_selector;
pub mod stat_card;
