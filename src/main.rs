use anyhow::{Error, Result};
use notification_pipeline::{
    NotificationBuilder, NotificationData, NotificationType, Priority, config::Config,
    strategy, utils::init_tracing,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

fn sample_data(kind: NotificationType) -> NotificationData {
    let id = Uuid::new_v4().to_string();

    match kind {
        NotificationType::Promotion => {
            NotificationData::new(id, "Flash sale", "70% off selected electronics", Priority::High)
                .with_payload("discount", json!(70))
                .with_payload("category", json!("electronics"))
        }
        NotificationType::Order => {
            NotificationData::new(id, "Order confirmed", "Your order #12345 was confirmed", Priority::Medium)
                .with_payload("orderId", json!("12345"))
                .with_payload("amount", json!(299.99))
        }
        NotificationType::Chat => {
            NotificationData::new(id, "New message", "You have a message from support", Priority::Urgent)
                .with_payload("chatId", json!("chat_789"))
                .with_payload("senderId", json!("support"))
        }
        NotificationType::System => {
            NotificationData::new(id, "Update available", "A new version is available", Priority::Low)
                .with_payload("version", json!("2.1.0"))
        }
    }
}

fn preset(kind: NotificationType, builder: NotificationBuilder) -> NotificationBuilder {
    match kind {
        NotificationType::Promotion => builder.with_urgent_behaviors().with_cache(),
        NotificationType::Order => builder.with_standard_behaviors().with_sound(),
        // Processed by hand below.
        NotificationType::Chat => builder.with_vibration().with_sound().with_auto_process(false),
        NotificationType::System => builder.with_silent_behaviors(),
    }
}

fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let extra = config.extra_decorators()?;

    for kind in config.demo_types() {
        let builder = preset(kind, NotificationBuilder::create(kind, sample_data(kind)))
            .with_decorators(&extra);

        info!(
            kind = %kind,
            config = %serde_json::to_string(&builder.inspect())?,
            "Builder configured"
        );

        let notification = builder.build()?;
        if !builder.inspect().auto_process {
            strategy::process(notification.as_ref(), kind)?;
        }
        notification.send();

        info!(kind = %kind, layers = %notification.describe(), "Notification sent");
    }

    Ok(())
}
