//! Trip context handlers.
//!
//! Query and command handlers producing the profile and mood records that a
//! downstream synthesis step combines into a plan.

mod analyze_emotion;
mod gather_trip_context;
mod read_user_profile;

pub use analyze_emotion::{AnalyzeEmotionCommand, AnalyzeEmotionHandler};
pub use gather_trip_context::{GatherTripContextHandler, GatherTripContextQuery, TripContext};
pub use read_user_profile::{
    ProfileToolResult, ReadUserProfileHandler, ReadUserProfileQuery, ToolStatus,
};
