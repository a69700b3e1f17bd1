pub mod participant_queries;
pub mod stats_queries;
