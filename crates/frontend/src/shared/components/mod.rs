pub mod card_animated;
pub mod date_input;
pub mod table;
pub mod ui;
