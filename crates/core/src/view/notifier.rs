use crate::models::notification::{NewTradeEvent, NotificationLevel};

/// Delivery of new-trade notifications.
///
/// Chosen once when the scheduler is built; `NoopNotifier` when the front
/// end has no notification surface.
pub trait TradeNotifier {
    fn notify(&mut self, event: &NewTradeEvent);
}

/// Drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl TradeNotifier for NoopNotifier {
    fn notify(&mut self, _event: &NewTradeEvent) {}
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl TradeNotifier for LogNotifier {
    fn notify(&mut self, event: &NewTradeEvent) {
        match event.level() {
            NotificationLevel::Success => {
                tracing::info!(ticker = %event.trade.ticker, kind = "success", "{}", event.message())
            }
            NotificationLevel::Info => {
                tracing::info!(ticker = %event.trade.ticker, kind = "info", "{}", event.message())
            }
        }
    }
}
