use super::*;

#[derive(Debug, Default)]
struct Marker {
    active: bool,
}

impl Activate for Marker {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

const INTERVAL: Duration = Duration::from_millis(5000);

fn deck(n: usize) -> SlideDeck<Marker> {
    let slides = (0..n).map(|_| Marker::default()).collect();
    let dots = (0..n).map(|_| Marker::default()).collect();
    SlideDeck::with_interval(slides, dots, INTERVAL).unwrap()
}

fn active_slides(deck: &SlideDeck<Marker>) -> Vec<usize> {
    deck.slides()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_active())
        .map(|(i, _)| i)
        .collect()
}

fn active_indicators(deck: &SlideDeck<Marker>) -> Vec<usize> {
    deck.indicators()
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_active())
        .map(|(i, _)| i)
        .collect()
}

fn assert_single_active(deck: &SlideDeck<Marker>) {
    assert_eq!(active_slides(deck), vec![deck.index()]);
    assert_eq!(active_indicators(deck), vec![deck.index()]);
}

#[test]
fn starts_on_first_slide_with_timer_armed() {
    let deck = deck(3);
    assert_eq!(deck.index(), 0);
    assert_single_active(&deck);
    assert_eq!(deck.time_until_advance(), Some(INTERVAL));
}

#[test]
fn clears_stale_active_marks_on_construction() {
    let slides = vec![Marker { active: true }, Marker { active: true }];
    let dots = vec![Marker::default(), Marker { active: true }];
    let deck = SlideDeck::new(slides, dots).unwrap();
    assert_single_active(&deck);
}

#[test]
fn rejects_mismatched_lengths() {
    let slides = vec![Marker::default(), Marker::default()];
    let dots = vec![Marker::default()];
    let err = SlideDeck::new(slides, dots).err().unwrap();
    assert_eq!(err, DeckError::LengthMismatch { slides: 2, indicators: 1 });
}

#[test]
fn next_wraps_around() {
    let mut deck = deck(3);
    deck.next();
    assert_eq!(deck.index(), 1);
    deck.next();
    assert_eq!(deck.index(), 2);
    deck.next();
    assert_eq!(deck.index(), 0);
    assert_single_active(&deck);
}

#[test]
fn previous_wraps_to_last() {
    let mut deck = deck(3);
    deck.previous();
    assert_eq!(deck.index(), 2);
    assert_single_active(&deck);
}

#[test]
fn next_k_times_lands_on_modular_index() {
    for n in 1..=6 {
        for start in 0..n {
            for k in 0..15 {
                let mut deck = deck(n);
                deck.go_to(start).unwrap();
                for _ in 0..k {
                    deck.next();
                }
                assert_eq!(deck.index(), (start + k) % n, "n={n} start={start} k={k}");
            }
        }
    }
}

#[test]
fn previous_k_times_lands_on_modular_index() {
    for n in 1..=6 {
        for start in 0..n {
            for k in 0..15 {
                let mut deck = deck(n);
                deck.go_to(start).unwrap();
                for _ in 0..k {
                    deck.previous();
                }
                assert_eq!(deck.index(), (start + k * n - k) % n, "n={n} start={start} k={k}");
                assert_single_active(&deck);
            }
        }
    }
}

#[test]
fn manual_navigation_restarts_the_interval() {
    let mut deck = deck(3);
    assert!(!deck.tick(Duration::from_millis(4000)));

    deck.next();
    assert_eq!(deck.time_until_advance(), Some(INTERVAL));

    // The first deadline would have fired here.
    assert!(!deck.tick(Duration::from_millis(1500)));
    assert_eq!(deck.index(), 1);

    assert!(deck.tick(Duration::from_millis(3500)));
    assert_eq!(deck.index(), 2);
}

#[test]
fn timer_drives_auto_advance_with_wraparound() {
    let mut deck = deck(2);
    assert!(deck.tick(INTERVAL));
    assert_eq!(deck.index(), 1);
    assert!(deck.tick(INTERVAL));
    assert_eq!(deck.index(), 0);
    assert_single_active(&deck);
}

#[test]
fn go_to_activates_target() {
    let mut deck = deck(4);
    deck.go_to(2).unwrap();
    assert_eq!(deck.index(), 2);
    assert_single_active(&deck);
}

#[test]
fn go_to_out_of_range_leaves_deck_untouched() {
    let mut deck = deck(3);
    deck.next();
    deck.tick(Duration::from_millis(1000));
    let remaining = deck.time_until_advance();

    let err = deck.go_to(3).unwrap_err();
    assert_eq!(err, DeckError::OutOfRange { index: 3, len: 3 });
    assert_eq!(deck.index(), 1);
    assert_eq!(deck.time_until_advance(), remaining);
    assert_single_active(&deck);
}

#[test]
fn pause_blocks_transitions_until_resumed() {
    let mut deck = deck(3);
    deck.pause();
    assert!(deck.is_paused());

    for _ in 0..10 {
        assert!(!deck.tick(INTERVAL));
    }
    assert_eq!(deck.index(), 0);

    deck.resume();
    assert!(!deck.is_paused());
    assert_eq!(deck.time_until_advance(), Some(INTERVAL));

    // Exactly one transition per interval after resuming.
    assert!(!deck.tick(INTERVAL - Duration::from_millis(1)));
    assert!(deck.tick(Duration::from_millis(1)));
    assert_eq!(deck.index(), 1);
}

#[test]
fn resume_replaces_rather_than_stacks() {
    let mut deck = deck(3);
    deck.resume();
    deck.resume();
    deck.tick(INTERVAL);
    assert_eq!(deck.index(), 1);
    assert_eq!(deck.time_until_advance(), Some(INTERVAL));
}

#[test]
fn empty_deck_is_idle() {
    let mut deck = deck(0);
    assert!(deck.is_empty());
    assert_eq!(deck.time_until_advance(), None);

    assert!(!deck.auto_advance());
    assert_eq!(deck.time_until_advance(), None);

    deck.next();
    deck.previous();
    deck.resume();
    assert_eq!(deck.time_until_advance(), None);
    assert!(!deck.tick(INTERVAL * 3));
    assert!(deck.go_to(0).is_err());
    assert!(!deck.is_paused());
}

#[test]
fn single_slide_deck_stays_on_itself() {
    let mut deck = deck(1);
    deck.next();
    assert_eq!(deck.index(), 0);
    deck.previous();
    assert_eq!(deck.index(), 0);
    assert!(deck.tick(INTERVAL));
    assert_single_active(&deck);
}

#[test]
fn interval_change_applies_on_next_schedule() {
    let mut deck = deck(3);
    deck.set_interval(Duration::from_millis(100));
    assert_eq!(deck.time_until_advance(), Some(INTERVAL));

    deck.next();
    assert_eq!(deck.time_until_advance(), Some(Duration::from_millis(100)));
}
