pub mod buddy_group;
pub mod participant;
pub mod status;

// Re-exports for convenience
pub use buddy_group::BuddyGroup;
pub use participant::Participant;
pub use status::Status;

/// The whole roster, in insertion order.
pub type Table = Vec<Participant>;
