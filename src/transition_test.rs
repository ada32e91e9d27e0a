use super::*;

fn machine() -> Transition {
    Transition::new(10, 300)
}

fn token(step: &Step) -> u64 {
    step.pending.map(|p| p.token).unwrap_or_default()
}

// =============================================================
// Open
// =============================================================

#[test]
fn starts_closed() {
    assert_eq!(machine().phase(), Phase::Closed);
}

#[test]
fn open_reveals_then_animates_in() {
    let mut t = machine();
    let step = t.open();
    assert_eq!(step.effects, vec![Effect::Reveal]);
    assert_eq!(step.pending.map(|p| p.delay_ms), Some(10));
    assert_eq!(t.phase(), Phase::Opening);

    assert_eq!(t.settle(token(&step)), Some(Effect::AnimateIn));
    assert_eq!(t.phase(), Phase::Open);
}

#[test]
fn open_while_open_is_noop() {
    let mut t = machine();
    let step = t.open();
    t.settle(token(&step));
    assert_eq!(t.open(), Step::default());
    assert_eq!(t.phase(), Phase::Open);
}

#[test]
fn open_while_opening_keeps_pending_timer() {
    let mut t = machine();
    let first = t.open();
    assert_eq!(t.open(), Step::default());
    assert_eq!(t.settle(token(&first)), Some(Effect::AnimateIn));
}

// =============================================================
// Close
// =============================================================

#[test]
fn close_animates_out_then_conceals() {
    let mut t = machine();
    let opened = t.open();
    t.settle(token(&opened));

    let step = t.close();
    assert_eq!(step.effects, vec![Effect::AnimateOut]);
    assert_eq!(step.pending.map(|p| p.delay_ms), Some(300));
    assert_eq!(t.phase(), Phase::Closing);

    assert_eq!(t.settle(token(&step)), Some(Effect::Conceal));
    assert_eq!(t.phase(), Phase::Closed);
}

#[test]
fn close_when_closed_is_noop() {
    let mut t = machine();
    assert_eq!(t.close(), Step::default());
    assert_eq!(t.phase(), Phase::Closed);
}

#[test]
fn close_during_opening_cancels_fade_in() {
    let mut t = machine();
    let opened = t.open();
    let closed = t.close();
    assert_eq!(t.settle(token(&opened)), None);
    assert_eq!(t.settle(token(&closed)), Some(Effect::Conceal));
}

// =============================================================
// Superseded timers
// =============================================================

#[test]
fn reopen_during_closing_ignores_stale_conceal() {
    let mut t = machine();
    let opened = t.open();
    t.settle(token(&opened));
    let closed = t.close();
    let reopened = t.open();

    assert_eq!(reopened.effects, vec![Effect::Reveal]);
    assert_eq!(t.settle(token(&closed)), None);
    assert_eq!(t.phase(), Phase::Opening);
    assert_eq!(t.settle(token(&reopened)), Some(Effect::AnimateIn));
    assert_eq!(t.phase(), Phase::Open);
}

#[test]
fn settle_twice_is_noop() {
    let mut t = machine();
    let step = t.open();
    assert!(t.settle(token(&step)).is_some());
    assert_eq!(t.settle(token(&step)), None);
}

#[test]
fn tokens_increase_per_phase_change() {
    let mut t = machine();
    let a = token(&t.open());
    let b = token(&t.close());
    let c = token(&t.open());
    assert!(a < b && b < c);
}
