pub mod participant_repo;
pub mod participant_store;
pub mod schema;

pub use participant_store::ParticipantStore;
