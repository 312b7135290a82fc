//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod trip;

pub use trip::{
    AnalyzeEmotionCommand, AnalyzeEmotionHandler, GatherTripContextHandler,
    GatherTripContextQuery, ProfileToolResult, ReadUserProfileHandler, ReadUserProfileQuery,
    ToolStatus, TripContext,
};
