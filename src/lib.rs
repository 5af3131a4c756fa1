pub mod agent;
pub mod board;
pub mod search;
pub mod tournament;
