#[derive(Debug, Default, PartialEq, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub details: Option<String>,
    /// Capacity. `None` means unlimited.
    pub maximum_attendees: Option<i32>,
}

impl Event {
    /// Whether `registered` attendees already fill the event.
    ///
    /// Only a positive maximum limits registrations.
    pub fn is_full(&self, registered: u64) -> bool {
        match self.maximum_attendees {
            Some(maximum) if maximum > 0 => registered >= maximum as u64,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Event;

    #[test]
    fn test_is_full() {
        let event = Event {
            maximum_attendees: Some(1),
            ..Default::default()
        };

        assert!(!event.is_full(0));
        assert!(event.is_full(1));
        assert!(event.is_full(2));
    }

    #[test]
    fn test_is_full_without_maximum() {
        let unlimited = Event::default();
        let zero = Event {
            maximum_attendees: Some(0),
            ..Default::default()
        };

        assert!(!unlimited.is_full(10_000));
        assert!(!zero.is_full(10_000));
    }
}
