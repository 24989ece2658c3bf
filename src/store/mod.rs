pub mod logbook;
pub mod table;
