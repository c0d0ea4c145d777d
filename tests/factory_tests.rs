use std::collections::HashSet;

use anyhow::Result;
use notification_pipeline::{
    NotificationType, PipelineError,
    factory::{NotificationFactory, NotificationManager, OrderNotificationFactory, create_notification},
    models::effect::Effect,
};

use crate::support::{data_titled, order_data, recording};

/// Test: Every registered type produces a distinct send line containing the title
#[test]
fn test_each_type_sends_type_specific_text() -> Result<()> {
    let mut lines = HashSet::new();

    for kind in NotificationType::ALL {
        let (sink, dyn_sink) = recording();
        let title = format!("Title for {}", kind);
        let notification = create_notification(kind, data_titled("1", &title), dyn_sink)?;

        notification.send();

        let sent = sink.lines();
        assert_eq!(sent.len(), 1, "Base send should emit exactly one line");
        assert!(sent[0].contains(&title));
        assert!(sent[0].contains(kind.as_str()));
        lines.insert(sent[0].replace(&title, ""));
    }

    assert_eq!(lines.len(), 4, "Send text should be unique per type");

    Ok(())
}

/// Test: Factory constructs without sending
#[test]
fn test_factory_has_no_side_effects() -> Result<()> {
    let (sink, dyn_sink) = recording();

    let notification = create_notification(NotificationType::Chat, order_data(), dyn_sink)?;

    assert!(sink.is_empty());
    assert_eq!(notification.name(), "ChatNotification");
    assert_eq!(notification.id(), "2");
    assert_eq!(notification.snapshot(), order_data());

    Ok(())
}

/// Test: Missing factory fails with an error naming the type
#[test]
fn test_missing_factory_is_reported() -> Result<()> {
    let (sink, dyn_sink) = recording();
    let manager = NotificationManager::empty().register(NotificationType::Order, OrderNotificationFactory);

    let result = manager.create_notification(NotificationType::System, order_data(), dyn_sink);

    let err = result.err().expect("System has no factory registered");
    assert_eq!(err, PipelineError::MissingFactory(NotificationType::System));
    assert!(err.to_string().contains("system"));
    assert!(sink.is_empty());

    Ok(())
}

/// Test: Tags outside the enumeration never reach a factory
#[test]
fn test_unknown_tag_is_rejected() -> Result<()> {
    for tag in ["newsletter", "", "orders"] {
        let err = tag.parse::<NotificationType>().unwrap_err();
        assert_eq!(err, PipelineError::UnknownType(tag.to_string()));
    }

    Ok(())
}

/// Test: prepare_notification creates and sends in one step
#[test]
fn test_prepare_notification_sends_once() -> Result<()> {
    let (sink, dyn_sink) = recording();

    let notification = OrderNotificationFactory.prepare_notification(order_data(), dyn_sink);

    assert_eq!(
        sink.effects(),
        vec![Effect::Delivered {
            kind: NotificationType::Order,
            id: "2".to_string(),
            title: "Pedido enviado".to_string(),
        }]
    );
    assert_eq!(notification.title(), "Pedido enviado");

    Ok(())
}
