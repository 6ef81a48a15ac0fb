pub mod client;
pub mod events;
pub mod flex;
pub mod signature;
