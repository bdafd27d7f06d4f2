pub mod date;
pub mod fee;
pub mod location;
pub mod membership;
pub mod time_slot;
