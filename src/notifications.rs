use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    clients::sink::EffectSink,
    models::{
        effect::Effect,
        kind::NotificationType,
        notification::{Notification, NotificationData, Payload, Priority},
    },
};

/// Shared field storage for every concrete variant.
pub struct BasicNotification {
    data: NotificationData,
    sink: Arc<dyn EffectSink>,
}

impl BasicNotification {
    pub fn new(data: NotificationData, sink: Arc<dyn EffectSink>) -> Self {
        Self { data, sink }
    }

    fn deliver(&self, kind: NotificationType) {
        self.sink.record(Effect::Delivered {
            kind,
            id: self.data.id.clone(),
            title: self.data.title.clone(),
        });
    }
}

macro_rules! notification_variant {
    ($name:ident, $kind:expr) => {
        pub struct $name {
            base: BasicNotification,
        }

        impl $name {
            pub const KIND: NotificationType = $kind;

            pub fn new(data: NotificationData, sink: Arc<dyn EffectSink>) -> Self {
                Self {
                    base: BasicNotification::new(data, sink),
                }
            }
        }

        impl Notification for $name {
            fn id(&self) -> &str {
                &self.base.data.id
            }

            fn title(&self) -> &str {
                &self.base.data.title
            }

            fn message(&self) -> &str {
                &self.base.data.message
            }

            fn timestamp(&self) -> DateTime<Utc> {
                self.base.data.timestamp
            }

            fn priority(&self) -> Priority {
                self.base.data.priority
            }

            fn payload(&self) -> &Payload {
                &self.base.data.payload
            }

            fn sink(&self) -> &Arc<dyn EffectSink> {
                &self.base.sink
            }

            fn name(&self) -> &'static str {
                stringify!($name)
            }

            fn send(&self) {
                self.base.deliver(Self::KIND);
            }
        }
    };
}

notification_variant!(PromotionNotification, NotificationType::Promotion);
notification_variant!(OrderNotification, NotificationType::Order);
notification_variant!(ChatNotification, NotificationType::Chat);
notification_variant!(SystemNotification, NotificationType::System);
