pub mod metric_card;
pub mod metric_table;
pub mod tag_badge;
pub mod trend_chip;
