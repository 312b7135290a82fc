//! Application layer - Queries, Commands, and Handlers.
//!
//! This layer coordinates domain services with the ports that feed them.
//! Handlers are what the agent layer calls as tools.

pub mod handlers;

pub use handlers::{
    AnalyzeEmotionCommand, AnalyzeEmotionHandler, GatherTripContextHandler,
    GatherTripContextQuery, ProfileToolResult, ReadUserProfileHandler, ReadUserProfileQuery,
    ToolStatus, TripContext,
};
