//! Events recorded while the wheel runs over one price path.
//!
//! Every option sale, assignment and worthless expiry is captured so a
//! single path can be replayed or displayed next to its price chart.

use serde::{Deserialize, Serialize};
use wheel_lab_domain::OptionSide;

/// Types of events that can occur during a wheel simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelEventType {
    /// A new put or call was written.
    OptionSold,
    /// The short option was exercised against the wheel.
    Assigned,
    /// The short option expired without assignment.
    ExpiredWorthless,
}

/// Event-specific data payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventData {
    /// Option sale data.
    OptionSold {
        /// Option written, with its strike.
        side: OptionSide,
        /// Premium credited to cash.
        premium: f64,
    },
    /// Assignment data.
    Assigned {
        /// Option that was exercised.
        side: OptionSide,
        /// Shares held after the assignment settled.
        shares_after: u32,
        /// Cash after the assignment settled.
        cash_after: f64,
    },
    /// Worthless expiry data.
    ExpiredWorthless {
        /// Option that lapsed.
        side: OptionSide,
    },
}

/// A wheel event with full context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    /// Trading day of the event. `None` for the opening sale before day 0.
    pub day: Option<usize>,
    /// Type of event.
    pub event_type: WheelEventType,
    /// Underlying price at the time of the event.
    pub price: f64,
    /// Additional event-specific data.
    pub data: EventData,
}

impl WheelEvent {
    /// Creates an option sale event.
    #[must_use]
    pub fn option_sold(day: Option<usize>, price: f64, side: OptionSide, premium: f64) -> Self {
        Self {
            day,
            event_type: WheelEventType::OptionSold,
            price,
            data: EventData::OptionSold { side, premium },
        }
    }

    /// Creates an assignment event.
    #[must_use]
    pub fn assigned(
        day: usize,
        price: f64,
        side: OptionSide,
        shares_after: u32,
        cash_after: f64,
    ) -> Self {
        Self {
            day: Some(day),
            event_type: WheelEventType::Assigned,
            price,
            data: EventData::Assigned {
                side,
                shares_after,
                cash_after,
            },
        }
    }

    /// Creates a worthless expiry event.
    #[must_use]
    pub fn expired_worthless(day: usize, price: f64, side: OptionSide) -> Self {
        Self {
            day: Some(day),
            event_type: WheelEventType::ExpiredWorthless,
            price,
            data: EventData::ExpiredWorthless { side },
        }
    }

    /// Option the event refers to.
    #[must_use]
    pub fn side(&self) -> OptionSide {
        match &self.data {
            EventData::OptionSold { side, .. }
            | EventData::Assigned { side, .. }
            | EventData::ExpiredWorthless { side } => *side,
        }
    }
}

/// Event log for collecting all events during one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    /// All recorded events.
    events: Vec<WheelEvent>,
}

impl EventLog {
    /// Creates a new empty event log.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Records an event.
    pub fn record(&mut self, event: WheelEvent) {
        self.events.push(event);
    }

    /// Returns all events.
    #[must_use]
    pub fn events(&self) -> &[WheelEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns events of a specific type.
    #[must_use]
    pub fn events_of_type(&self, event_type: WheelEventType) -> Vec<&WheelEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns the count of events by type.
    #[must_use]
    pub fn count_by_type(&self, event_type: WheelEventType) -> usize {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }

    /// Returns total assignment count.
    #[must_use]
    pub fn assignment_count(&self) -> usize {
        self.count_by_type(WheelEventType::Assigned)
    }

    /// Returns total option sale count.
    #[must_use]
    pub fn option_sale_count(&self) -> usize {
        self.count_by_type(WheelEventType::OptionSold)
    }

    /// Trading days on which the short option expired, assigned or not.
    #[must_use]
    pub fn expiry_days(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter(|e| e.event_type != WheelEventType::OptionSold)
            .filter_map(|e| e.day)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_record_and_query() {
        let mut log = EventLog::new();

        let put = OptionSide::Put { strike: 95.0 };
        let call = OptionSide::Call { strike: 97.0 };

        log.record(WheelEvent::option_sold(None, 100.0, put, 200.0));
        log.record(WheelEvent::assigned(20, 92.0, put, 100, 700.0));
        log.record(WheelEvent::option_sold(Some(20), 92.0, call, 184.0));
        log.record(WheelEvent::expired_worthless(41, 93.0, call));

        assert_eq!(log.len(), 4);
        assert_eq!(log.option_sale_count(), 2);
        assert_eq!(log.assignment_count(), 1);
        assert_eq!(log.count_by_type(WheelEventType::ExpiredWorthless), 1);
        assert_eq!(log.expiry_days(), vec![20, 41]);
        assert_eq!(log.events_of_type(WheelEventType::OptionSold)[1].side(), call);
    }

    #[test]
    fn test_event_serializes_with_kind_tag() {
        let event = WheelEvent::option_sold(None, 100.0, OptionSide::Put { strike: 95.0 }, 200.0);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "option_sold");
        assert_eq!(json["data"]["kind"], "option_sold");
        assert_eq!(json["data"]["side"]["type"], "put");
        assert!(json["day"].is_null());
    }
}
