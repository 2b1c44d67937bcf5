//! Best-effort notification dispatch.
//!
//! Class mutations announce themselves to whoever renders notifications
//! for affected students. Delivery is an external concern; the engine only
//! guarantees that a failed dispatch never fails the mutation that
//! triggered it.

use async_trait::async_trait;

use crate::api::{ClassId, UserId};

/// Sink for schedule-change notifications addressed to a cohort.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Notify every member of `class_id` except `actor`.
    async fn notify_class(
        &self,
        actor: UserId,
        class_id: ClassId,
        kind: &str,
        message: &str,
    ) -> anyhow::Result<()>;
}

/// Default sink: records the notification in the log and nothing else.
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn notify_class(
        &self,
        actor: UserId,
        class_id: ClassId,
        kind: &str,
        message: &str,
    ) -> anyhow::Result<()> {
        log::info!(
            "notify cohort {} (actor {}): [{}] {}",
            class_id.value(),
            actor.value(),
            kind,
            message
        );
        Ok(())
    }
}

/// Dispatch a notification, swallowing any failure.
pub async fn notify_best_effort(
    sink: &dyn NotificationSink,
    actor: UserId,
    class_id: ClassId,
    kind: &str,
    message: &str,
) {
    if let Err(e) = sink.notify_class(actor, class_id, kind, message).await {
        log::warn!(
            "notification dispatch failed for cohort {}: {}",
            class_id.value(),
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSink;

    #[async_trait]
    impl NotificationSink for FailingSink {
        async fn notify_class(
            &self,
            _actor: UserId,
            _class_id: ClassId,
            _kind: &str,
            _message: &str,
        ) -> anyhow::Result<()> {
            anyhow::bail!("sink offline")
        }
    }

    struct CountingSink(AtomicUsize);

    #[async_trait]
    impl NotificationSink for CountingSink {
        async fn notify_class(
            &self,
            _actor: UserId,
            _class_id: ClassId,
            _kind: &str,
            _message: &str,
        ) -> anyhow::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_swallowed() {
        // Must not panic or propagate.
        notify_best_effort(
            &FailingSink,
            UserId::new(1),
            ClassId::new(2),
            "CLASS_UPDATED",
            "msg",
        )
        .await;
    }

    #[tokio::test]
    async fn test_dispatch_reaches_sink() {
        let sink = CountingSink(AtomicUsize::new(0));
        notify_best_effort(&sink, UserId::new(1), ClassId::new(2), "CLASS_DELETED", "msg").await;
        assert_eq!(sink.0.load(Ordering::SeqCst), 1);
    }
}
