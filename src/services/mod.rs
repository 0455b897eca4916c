pub mod collection;
pub mod events;
