#[cfg(test)]
mod tests {
    use crate::event::Event;
    use crate::mirror::{Announcement, Mirror, LOGIN_FAILED_TEXT};
    use queueboard::ticket::{Snapshot, Ticket};

    fn ticket(number: &str, counter: &str) -> Ticket {
        Ticket::new(number, Some(counter.to_string()))
    }

    fn calling(current: Option<Ticket>, queue: Vec<Ticket>) -> Event {
        Event::Update(Snapshot { queue, current })
    }

    #[test]
    fn test_snapshot_replaces_state_wholesale() {
        let mut mirror = Mirror::new();
        mirror.apply(Event::Init(Snapshot {
            queue: vec![ticket("A2", "Counter 1"), ticket("A3", "Counter 2")],
            current: Some(ticket("A1", "Counter 1")),
        }));
        mirror.apply(calling(None, vec![ticket("B9", "Pick-Up counter")]));

        assert_eq!(mirror.queue(), &[ticket("B9", "Pick-Up counter")]);
        assert_eq!(mirror.current(), None);
    }

    #[test]
    fn test_new_current_is_announced() {
        let mut mirror = Mirror::new();
        let announcement = mirror.apply(calling(Some(ticket("A42", "Counter 1")), vec![]));

        assert_eq!(
            announcement,
            Some(Announcement {
                number: "A42".to_string(),
                counter: Some("Counter 1".to_string()),
            })
        );
    }

    #[test]
    fn test_same_current_is_not_announced_again() {
        let mut mirror = Mirror::new();
        mirror.apply(calling(Some(ticket("A1", "Counter 1")), vec![]));

        let announcement = mirror.apply(calling(
            Some(ticket("A1", "Counter 1")),
            vec![ticket("A2", "Counter 2")],
        ));
        assert_eq!(announcement, None);
    }

    #[test]
    fn test_same_number_after_empty_is_announced() {
        let mut mirror = Mirror::new();
        assert!(mirror
            .apply(calling(Some(ticket("A1", "Counter 1")), vec![]))
            .is_some());
        assert!(mirror.apply(calling(None, vec![])).is_none());
        assert!(mirror
            .apply(calling(Some(ticket("A1", "Counter 2")), vec![]))
            .is_some());
    }

    #[test]
    fn test_init_with_current_is_announced() {
        let mut mirror = Mirror::new();
        let announcement = mirror.apply(Event::Init(Snapshot {
            queue: vec![],
            current: Some(ticket("B5", "Pick-Up counter")),
        }));
        assert_eq!(announcement.unwrap().number, "B5");
    }

    #[test]
    fn test_login_flow_is_local() {
        let mut mirror = Mirror::new();
        assert!(!mirror.is_admin());

        assert_eq!(mirror.apply(Event::AdminLoginFailed), None);
        assert_eq!(mirror.login_error(), Some(LOGIN_FAILED_TEXT));
        assert!(!mirror.is_admin());

        mirror.apply(Event::AdminLoginSuccess);
        assert!(mirror.is_admin());
        assert_eq!(mirror.login_error(), None);

        mirror.logout();
        assert!(!mirror.is_admin());
    }

    #[test]
    fn test_login_events_do_not_touch_board() {
        let mut mirror = Mirror::new();
        mirror.apply(calling(Some(ticket("A1", "Counter 1")), vec![]));
        mirror.apply(Event::AdminLoginSuccess);

        assert_eq!(mirror.current(), Some(&ticket("A1", "Counter 1")));
        // the next snapshot with the same ticket stays silent
        assert!(mirror
            .apply(calling(Some(ticket("A1", "Counter 1")), vec![]))
            .is_none());
    }

    #[test]
    fn test_speech_text() {
        let announcement = Announcement::from(&ticket("A42", "Counter 1"));
        assert_eq!(announcement.speech(), "A42. Please go to Counter 1");

        let announcement = Announcement::from(&Ticket::new("A42", None));
        assert_eq!(announcement.speech(), "A42.");
    }

    #[test]
    fn test_render_board() {
        let mut mirror = Mirror::new();
        assert_eq!(
            mirror.to_string(),
            "Queue:\n  No one in queue.\nNow Calling: --\nWaiting for next...\n[viewer]"
        );

        mirror.apply(calling(
            Some(ticket("B1", "Pick-Up counter")),
            vec![ticket("A2", "Counter 2")],
        ));
        mirror.apply(Event::AdminLoginSuccess);
        assert_eq!(
            mirror.to_string(),
            "Queue:\n  A2 >> Counter 2\nNow Calling: B1\nPlease go to Pick-Up counter\n[admin]"
        );
    }
}
