use anyhow::Result;
use notification_pipeline::{
    NotificationType, PipelineError,
    factory::create_notification,
    models::effect::Effect,
    strategy::{self, ChatProcessingStrategy, NotificationProcessor},
};
use std::sync::Arc;

use crate::support::{order_data, recording};

/// Test: Each type dispatches to its own strategy
#[test]
fn test_dispatch_routes_by_type_tag() -> Result<()> {
    for kind in NotificationType::ALL {
        let (sink, dyn_sink) = recording();
        let notification = create_notification(kind, order_data(), dyn_sink)?;

        strategy::process(notification.as_ref(), kind)?;

        assert_eq!(
            sink.effects(),
            vec![Effect::Processed {
                kind,
                id: "2".to_string(),
            }]
        );
    }

    Ok(())
}

/// Test: The tag, not the variant, decides which strategy runs
#[test]
fn test_dispatch_uses_supplied_tag() -> Result<()> {
    let (sink, dyn_sink) = recording();
    let notification = create_notification(NotificationType::Order, order_data(), dyn_sink)?;

    strategy::process(notification.as_ref(), NotificationType::Chat)?;

    assert_eq!(
        sink.lines(),
        vec!["Processing chat: notify users, update chat history".to_string()]
    );

    Ok(())
}

/// Test: Processing leaves the record untouched and is repeatable
#[test]
fn test_processing_is_idempotent() -> Result<()> {
    let (sink, dyn_sink) = recording();
    let notification = create_notification(NotificationType::System, order_data(), dyn_sink)?;

    strategy::process(notification.as_ref(), NotificationType::System)?;
    strategy::process(notification.as_ref(), NotificationType::System)?;

    let effects = sink.effects();
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], effects[1]);
    assert_eq!(notification.snapshot(), order_data());

    Ok(())
}

/// Test: Missing strategy fails fast instead of doing nothing
#[test]
fn test_missing_strategy_is_reported() -> Result<()> {
    let (sink, dyn_sink) = recording();
    let notification = create_notification(NotificationType::Promotion, order_data(), dyn_sink)?;
    let processor =
        NotificationProcessor::empty().register(NotificationType::Chat, Arc::new(ChatProcessingStrategy));

    let err = processor
        .process(notification.as_ref(), NotificationType::Promotion)
        .unwrap_err();

    assert_eq!(err, PipelineError::MissingStrategy(NotificationType::Promotion));
    assert!(sink.is_empty());

    Ok(())
}
