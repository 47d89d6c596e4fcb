pub mod report_list;
pub mod report_summary_card;
