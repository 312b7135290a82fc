//! trip-context - command line entry point
//!
//! Gathers the profile and mood context for one planning request and prints
//! it as JSON:
//!
//! ```text
//! trip-context [--user <id>] <text...>
//! ```

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trip_context::adapters::{DefaultProfileSource, FsProfileSource, KeywordMoodClassifier};
use trip_context::application::{
    AnalyzeEmotionHandler, GatherTripContextHandler, GatherTripContextQuery,
    ReadUserProfileHandler,
};
use trip_context::config::{AppConfig, LogFormat, LoggingConfig, ProfileSourceKind};
use trip_context::domain::foundation::UserId;
use trip_context::domain::mood::MoodRuleSet;
use trip_context::domain::travel::ProfileNormalizer;
use trip_context::ports::ProfileSource;

const DEFAULT_USER: &str = "default";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.logging);

    let (user_id, user_input) = parse_args(std::env::args().skip(1))?;
    let handler = build_handler(&config).await?;

    info!(user_id = %user_id, "Gathering trip context");
    let context = handler
        .handle(GatherTripContextQuery {
            user_id,
            user_input,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&context)?);
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(logging.env_filter());
    match logging.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(UserId, String), Box<dyn Error>> {
    let mut user = DEFAULT_USER.to_string();
    let mut words = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--user" {
            user = args.next().ok_or("--user requires a value")?;
        } else {
            words.push(arg);
        }
    }

    Ok((UserId::new(user)?, words.join(" ")))
}

async fn build_handler(config: &AppConfig) -> Result<GatherTripContextHandler, Box<dyn Error>> {
    let source: Arc<dyn ProfileSource> = match (config.profile.source, &config.profile.data_dir) {
        (ProfileSourceKind::File, Some(dir)) => {
            info!(data_dir = %dir.display(), "Using filesystem profile source");
            Arc::new(FsProfileSource::new(dir))
        }
        (ProfileSourceKind::File, None) => return Err("profile.data_dir is required".into()),
        (ProfileSourceKind::Default, _) => Arc::new(DefaultProfileSource::new()),
    };

    let rules = match &config.classifier.rules_path {
        Some(path) => {
            let yaml = tokio::fs::read_to_string(path).await?;
            let rules = MoodRuleSet::from_yaml_str(&yaml)?;
            info!(path = %path.display(), rules = rules.len(), "Loaded mood rule table");
            rules
        }
        None => MoodRuleSet::builtin(),
    };

    let normalizer = ProfileNormalizer::new(config.profile.normalizer_defaults());

    Ok(GatherTripContextHandler::new(
        ReadUserProfileHandler::new(source, normalizer),
        AnalyzeEmotionHandler::new(Arc::new(KeywordMoodClassifier::new(rules))),
    ))
}
