//! Dismissal watcher - escape and outside-interaction detection while open

use crate::event::{Event, Key, MouseEvent};
use crate::layout::Rect;
use std::time::{Duration, Instant};

/// Presses this close to arming belong to the interaction that opened the
/// overlay; within a synchronous event loop the delta is effectively zero.
const OPEN_CLICK_GRACE: Duration = Duration::from_millis(5);

/// Signal reported to the owning controller while armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSignal {
    /// Escape was pressed
    EscapeRequested,
    /// A pointer press landed outside both the trigger and the content
    OutsideInteraction,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    since: Instant,
    trigger: Option<Rect>,
    content: Option<Rect>,
}

/// Observes global pointer and keyboard input while an overlay is open
///
/// Armed exactly while its overlay is open; every `arm()` is paired with
/// one `disarm()`, which the owning controller also guarantees on drop.
/// While disarmed it reports nothing, so a closed overlay can never react
/// to stray input.
#[derive(Debug, Default)]
pub struct DismissalWatcher {
    armed: Option<Armed>,
}

impl DismissalWatcher {
    pub fn new() -> Self {
        DismissalWatcher { armed: None }
    }

    /// Begin observing, remembering when and over which regions
    ///
    /// `trigger` and `content` are the screen regions of the opening
    /// element and the overlay panel at arm time; either may be absent,
    /// which disables the checks that depend on it.
    pub fn arm(&mut self, since: Instant, trigger: Option<Rect>, content: Option<Rect>) {
        self.armed = Some(Armed {
            since,
            trigger,
            content,
        });
    }

    /// Stop observing; safe to call any number of times
    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// When the watcher was armed, if it is
    pub fn armed_since(&self) -> Option<Instant> {
        self.armed.map(|a| a.since)
    }

    /// Classify a global input event
    ///
    /// Only escape and pointer presses are interpreted here; navigation
    /// keys are the controller's business. Returns `None` whenever
    /// disarmed.
    pub fn observe(&self, event: &Event, now: Instant) -> Option<DismissSignal> {
        let armed = self.armed.as_ref()?;

        match event {
            Event::Key(Key::Esc) => Some(DismissSignal::EscapeRequested),
            Event::Mouse(MouseEvent::Press(_, col, row)) => {
                // Without a content region there is no inside/outside.
                let content = armed.content?;
                if content.contains(*col, *row) {
                    return None;
                }
                // The press that opened the overlay arrives in the same
                // event-loop turn it armed us; it must not also dismiss.
                if now.saturating_duration_since(armed.since) <= OPEN_CLICK_GRACE {
                    return None;
                }
                // Later presses on the trigger are the host's toggle.
                if let Some(trigger) = armed.trigger {
                    if trigger.contains(*col, *row) {
                        return None;
                    }
                }
                Some(DismissSignal::OutsideInteraction)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MouseButton;

    fn press(col: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row))
    }

    fn armed_watcher() -> (DismissalWatcher, Instant) {
        let mut w = DismissalWatcher::new();
        let t0 = Instant::now();
        // trigger at (0,0)-(10,1), content panel below it
        w.arm(
            t0,
            Some(Rect::new(0, 0, 10, 1)),
            Some(Rect::new(0, 1, 10, 5)),
        );
        (w, t0)
    }

    fn past_grace(t0: Instant) -> Instant {
        t0 + Duration::from_secs(1)
    }

    #[test]
    fn test_disarmed_reports_nothing() {
        let w = DismissalWatcher::new();
        assert_eq!(w.observe(&Event::Key(Key::Esc), Instant::now()), None);
        assert_eq!(w.observe(&press(50, 50), Instant::now()), None);
    }

    #[test]
    fn test_escape_while_armed() {
        let (w, t0) = armed_watcher();
        assert_eq!(
            w.observe(&Event::Key(Key::Esc), t0),
            Some(DismissSignal::EscapeRequested)
        );
    }

    #[test]
    fn test_outside_press_reported() {
        let (w, t0) = armed_watcher();
        assert_eq!(
            w.observe(&press(50, 50), past_grace(t0)),
            Some(DismissSignal::OutsideInteraction)
        );
    }

    #[test]
    fn test_press_inside_content_ignored() {
        let (w, t0) = armed_watcher();
        assert_eq!(w.observe(&press(3, 2), past_grace(t0)), None);
    }

    #[test]
    fn test_open_click_suppressed() {
        // The same press that armed the watcher, targeting the trigger
        let (w, t0) = armed_watcher();
        assert_eq!(w.observe(&press(3, 0), t0), None);
    }

    #[test]
    fn test_later_trigger_press_ignored() {
        // Belongs to the host's toggle, not an outside interaction
        let (w, t0) = armed_watcher();
        assert_eq!(w.observe(&press(3, 0), past_grace(t0)), None);
    }

    #[test]
    fn test_no_content_region_disables_outside_check() {
        let mut w = DismissalWatcher::new();
        let t0 = Instant::now();
        w.arm(t0, None, None);
        assert_eq!(w.observe(&press(50, 50), past_grace(t0)), None);
        // Escape still works
        assert_eq!(
            w.observe(&Event::Key(Key::Esc), t0),
            Some(DismissSignal::EscapeRequested)
        );
    }

    #[test]
    fn test_other_keys_not_interpreted() {
        let (w, t0) = armed_watcher();
        assert_eq!(w.observe(&Event::Key(Key::Down), t0), None);
        assert_eq!(w.observe(&Event::Key(Key::Enter), t0), None);
    }

    #[test]
    fn test_disarm_idempotent() {
        let (mut w, _) = armed_watcher();
        assert!(w.is_armed());
        w.disarm();
        w.disarm();
        assert!(!w.is_armed());
    }
}
