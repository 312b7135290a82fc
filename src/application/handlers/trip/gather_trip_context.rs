//! GatherTripContext - Query handler running profile retrieval and mood
//! classification side by side.
//!
//! The two have no data dependency, so they are joined rather than chained.
//! The combined [`TripContext`] is what the synthesis step reads, under the
//! `user_profile` and `emotional_context` keys.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::mood::MoodAssessment;
use crate::domain::travel::UserProfile;

use super::analyze_emotion::{AnalyzeEmotionCommand, AnalyzeEmotionHandler};
use super::read_user_profile::{ReadUserProfileHandler, ReadUserProfileQuery};

/// Query for both context records of one planning request.
#[derive(Debug, Clone)]
pub struct GatherTripContextQuery {
    pub user_id: UserId,
    pub user_input: String,
}

/// Profile and mood records handed to the synthesis step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripContext {
    pub user_profile: UserProfile,
    pub emotional_context: MoodAssessment,
}

/// Handler joining the profile and mood handlers.
pub struct GatherTripContextHandler {
    profile_handler: ReadUserProfileHandler,
    emotion_handler: AnalyzeEmotionHandler,
}

impl GatherTripContextHandler {
    pub fn new(
        profile_handler: ReadUserProfileHandler,
        emotion_handler: AnalyzeEmotionHandler,
    ) -> Self {
        Self {
            profile_handler,
            emotion_handler,
        }
    }

    pub async fn handle(&self, query: GatherTripContextQuery) -> Result<TripContext, DomainError> {
        let GatherTripContextQuery {
            user_id,
            user_input,
        } = query;

        let profile_fut = self
            .profile_handler
            .handle(ReadUserProfileQuery { user_id });
        let emotion_fut = async {
            self.emotion_handler
                .handle(AnalyzeEmotionCommand { user_input })
        };

        let (profile, emotional_context) = tokio::join!(profile_fut, emotion_fut);

        Ok(TripContext {
            user_profile: profile?.profile_data,
            emotional_context,
        })
    }
}
