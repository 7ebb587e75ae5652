//! Key repeat gate.
//!
//! Hosts discard OS autorepeat and feed only genuine presses and releases
//! in here; the gate then re-emits the held key's decoded event on its own
//! schedule, re-stamped with the modifiers held at emit time. Exactly one
//! key repeats at a time, the most recently pressed.

use edit_core::{InputEvent, Modifiers};
use std::time::{Duration, Instant};

/// First repeat fires this long after the initial press.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(500);
/// Later repeats fire at this interval.
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(20);

/// Repeat schedule for a single held key.
///
/// `K` identifies a physical key for release matching; the host picks the
/// type (a key code, a scan code, anything `Copy + PartialEq`).
///
/// The emit pattern per press is: once immediately, once after the initial
/// delay, then at most once per [`tick`](Keyboard::tick) while the interval
/// keeps elapsing. Driving ticks from the frame loop therefore caps the
/// repeat rate at the frame rate, which is the intent.
#[derive(Clone, Debug)]
pub struct Keyboard<K> {
    initial_delay: Duration,
    repeat_interval: Duration,
    held: Option<Held<K>>,
}

#[derive(Clone, Debug)]
struct Held<K> {
    key: K,
    event: InputEvent,
    next_fire: Instant,
}

impl<K: Copy + PartialEq> Keyboard<K> {
    pub fn new(initial_delay: Duration, repeat_interval: Duration) -> Self {
        Self {
            initial_delay,
            repeat_interval,
            held: None,
        }
    }

    /// Record a fresh press and emit its decoded event immediately.
    ///
    /// A press while another key is held replaces it; only the newest key
    /// repeats.
    pub fn press(&mut self, key: K, event: InputEvent, now: Instant, out: &mut Vec<InputEvent>) {
        out.push(event);
        self.held = Some(Held {
            key,
            event,
            next_fire: now + self.initial_delay,
        });
    }

    /// Stop the schedule for `key`. Releasing a key that is not the held
    /// one changes nothing.
    pub fn release(&mut self, key: K) {
        if self.held.as_ref().is_some_and(|h| h.key == key) {
            self.held = None;
        }
    }

    /// Emit at most one repeat if the held key's schedule is due.
    ///
    /// A repeat is synthesized now, not at press time, so it carries
    /// `mods` instead of the flags captured with the press. Holding an
    /// arrow and pressing shift mid-hold starts extending a selection,
    /// the same as OS autorepeat would.
    pub fn tick(&mut self, now: Instant, mods: Modifiers, out: &mut Vec<InputEvent>) {
        let Some(held) = &mut self.held else {
            return;
        };
        if now >= held.next_fire {
            out.push(held.event.with_mods(mods));
            held.next_fire = now + self.repeat_interval;
        }
    }
}

impl<K> Default for Keyboard<K> {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            repeat_interval: DEFAULT_REPEAT_INTERVAL,
            held: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edit_core::Key;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    fn gate() -> Keyboard<u8> {
        Keyboard::new(Duration::from_millis(500), Duration::from_millis(20))
    }

    #[test]
    fn press_emits_immediately() {
        let base = Instant::now();
        let mut kb = gate();
        let mut out = Vec::new();

        kb.press(1, InputEvent::typed('a'), base, &mut out);
        assert_eq!(out, vec![InputEvent::typed('a')]);
    }

    #[test]
    fn first_repeat_waits_for_the_initial_delay() {
        let base = Instant::now();
        let mut kb = gate();
        let mut out = Vec::new();
        kb.press(1, InputEvent::typed('a'), base, &mut out);
        out.clear();

        kb.tick(at(base, 499), Modifiers::NONE, &mut out);
        assert!(out.is_empty());

        kb.tick(at(base, 500), Modifiers::NONE, &mut out);
        assert_eq!(out, vec![InputEvent::typed('a')]);
    }

    #[test]
    fn later_repeats_fire_once_per_interval() {
        let base = Instant::now();
        let mut kb = gate();
        let mut out = Vec::new();
        kb.press(1, InputEvent::key(Key::Backspace), base, &mut out);
        kb.tick(at(base, 500), Modifiers::NONE, &mut out);
        out.clear();

        kb.tick(at(base, 510), Modifiers::NONE, &mut out);
        assert!(out.is_empty(), "interval not yet elapsed");

        kb.tick(at(base, 520), Modifiers::NONE, &mut out);
        kb.tick(at(base, 525), Modifiers::NONE, &mut out);
        kb.tick(at(base, 540), Modifiers::NONE, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn tick_emits_at_most_one_event_per_call() {
        let base = Instant::now();
        let mut kb = gate();
        let mut out = Vec::new();
        kb.press(1, InputEvent::typed('a'), base, &mut out);
        out.clear();

        // A long stall does not flood the widget on the next frame.
        kb.tick(at(base, 5000), Modifiers::NONE, &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn release_stops_the_schedule() {
        let base = Instant::now();
        let mut kb = gate();
        let mut out = Vec::new();
        kb.press(1, InputEvent::typed('a'), base, &mut out);
        kb.release(1);
        out.clear();

        kb.tick(at(base, 1000), Modifiers::NONE, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn releasing_another_key_keeps_the_held_one() {
        let base = Instant::now();
        let mut kb = gate();
        let mut out = Vec::new();
        kb.press(1, InputEvent::typed('a'), base, &mut out);
        kb.release(2);
        out.clear();

        kb.tick(at(base, 500), Modifiers::NONE, &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn new_press_replaces_the_held_key() {
        let base = Instant::now();
        let mut kb = gate();
        let mut out = Vec::new();
        kb.press(1, InputEvent::typed('a'), base, &mut out);
        kb.press(2, InputEvent::typed('b'), at(base, 100), &mut out);
        out.clear();

        // The first key's schedule is gone; only the second repeats.
        kb.tick(at(base, 500), Modifiers::NONE, &mut out);
        assert!(out.is_empty());
        kb.tick(at(base, 600), Modifiers::NONE, &mut out);
        assert_eq!(out, vec![InputEvent::typed('b')]);

        // Releasing the replaced key must not cancel the active one.
        kb.release(1);
        kb.tick(at(base, 620), Modifiers::NONE, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn repeats_carry_the_live_modifiers() {
        let base = Instant::now();
        let mut kb = gate();
        let mut out = Vec::new();
        kb.press(1, InputEvent::key(Key::Left), base, &mut out);
        assert_eq!(out, vec![InputEvent::key(Key::Left)]);
        out.clear();

        // Shift goes down while the arrow is still held; repeats pick it
        // up without a re-press, and drop it again once it is gone.
        kb.tick(at(base, 500), Modifiers::SHIFT, &mut out);
        assert_eq!(out, vec![InputEvent::key_with(Key::Left, Modifiers::SHIFT)]);
        out.clear();

        kb.tick(at(base, 520), Modifiers::NONE, &mut out);
        assert_eq!(out, vec![InputEvent::key(Key::Left)]);
    }
}
