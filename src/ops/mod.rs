pub mod participant_ops;

pub use participant_ops::ParticipantKey;
