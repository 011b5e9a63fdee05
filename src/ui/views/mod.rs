pub mod choice;
pub mod continent;
pub mod failed;
pub mod flag;
pub mod map;
