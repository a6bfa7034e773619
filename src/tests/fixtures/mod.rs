pub mod state;
pub mod traces;
pub mod users;
