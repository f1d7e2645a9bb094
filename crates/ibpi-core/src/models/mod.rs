pub mod answer_sheet;
pub mod scored;
