pub mod cards;
pub mod generate;
pub mod session;
