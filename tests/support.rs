use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use notification_pipeline::{
    NotificationData, Priority,
    clients::sink::{EffectSink, RecordingSink},
};
use serde_json::json;

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn order_data() -> NotificationData {
    NotificationData::new("2", "Pedido enviado", "Tu pedido #12345 ha sido enviado", Priority::High)
        .with_timestamp(fixed_timestamp())
        .with_payload("orderId", json!("12345"))
}

pub fn data_titled(id: &str, title: &str) -> NotificationData {
    NotificationData::new(id, title, "test message", Priority::Medium).with_timestamp(fixed_timestamp())
}

pub fn recording() -> (Arc<RecordingSink>, Arc<dyn EffectSink>) {
    let sink = RecordingSink::shared();
    let dyn_sink: Arc<dyn EffectSink> = sink.clone();
    (sink, dyn_sink)
}
