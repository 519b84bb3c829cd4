//! Session flow integration tests
//!
//! Drives full start/expiry/reset sequences through the state machine and the
//! countdown worker's channel, the same path the UI runner takes.

use pomoglow::config::SessionConfig;
use pomoglow::countdown::{self, TimerUpdate};
use pomoglow::session::{Phase, SessionState, format_clock};
use std::sync::mpsc;
use std::time::Duration;

/// Integration test: a whole pomodoro cycle driven by worker expiries.
#[test]
fn test_start_expiry_cycle_matches_phase_table() {
    let config = SessionConfig {
        work: 1,
        short_break: 1,
        long_break: 1,
        sessions_before_long_break: 2,
    };
    let mut session = SessionState::new();
    let (tx, rx) = mpsc::channel();
    let mut phases = Vec::new();

    // Four reps with a long-break cadence of 2: the fourth rep is long.
    for _ in 0..4 {
        let (phase, seconds) = session.start(&config).expect("idle session must start");
        phases.push(phase);

        let handle = countdown::spawn(seconds, session.running_flag(), tx.clone());
        loop {
            match rx.recv_timeout(Duration::from_secs(3)).unwrap() {
                TimerUpdate::Remaining(_) => continue,
                TimerUpdate::Expired => break,
            }
        }
        handle.join().unwrap();
        session.on_expiry();
    }

    assert_eq!(
        phases,
        vec![Phase::Work, Phase::ShortBreak, Phase::Work, Phase::LongBreak]
    );
    assert_eq!(session.completed_pomodoros(), 2);
    assert!(!session.is_running());
}

/// Integration test: starting while a countdown is active is a no-op.
#[test]
fn test_start_while_running_spawns_no_second_worker() {
    let config = SessionConfig {
        work: 5,
        ..SessionConfig::default()
    };
    let mut session = SessionState::new();
    let (tx, rx) = mpsc::channel();

    let (_, seconds) = session.start(&config).unwrap();
    let handle = countdown::spawn(seconds, session.running_flag(), tx.clone());

    assert!(session.start(&config).is_none());
    assert_eq!(session.rep_count(), 1);

    // Tear down: the reset lowers the flag the worker polls.
    session.reset();
    handle.join().unwrap();
    while let Ok(update) = rx.try_recv() {
        assert_ne!(update, TimerUpdate::Expired);
    }
}

/// Integration test: reset mid-countdown never reaches the expiry path.
#[test]
fn test_reset_mid_countdown_fires_no_notification() {
    let config = SessionConfig {
        work: 30,
        ..SessionConfig::default()
    };
    let mut session = SessionState::new();
    let (tx, rx) = mpsc::channel();

    let (_, seconds) = session.start(&config).unwrap();
    let handle = countdown::spawn(seconds, session.running_flag(), tx);

    // First display write proves the worker is live, then reset.
    assert_eq!(
        rx.recv_timeout(Duration::from_secs(2)).unwrap(),
        TimerUpdate::Remaining(30)
    );
    session.reset();
    handle.join().unwrap();

    assert_eq!(session.rep_count(), 0);
    assert!(!session.is_running());
    while let Ok(update) = rx.try_recv() {
        assert_ne!(update, TimerUpdate::Expired);
    }

    // A second reset changes nothing.
    session.reset();
    assert_eq!(session.rep_count(), 0);
    assert!(!session.is_running());
}

/// Integration test: the worker publishes display-ready second counts.
#[test]
fn test_worker_updates_format_as_clock_text() {
    let mut session = SessionState::new();
    let config = SessionConfig {
        work: 2,
        ..SessionConfig::default()
    };
    let (tx, rx) = mpsc::channel();

    let (_, seconds) = session.start(&config).unwrap();
    countdown::spawn(seconds, session.running_flag(), tx)
        .join()
        .unwrap();

    let mut displayed = Vec::new();
    while let Ok(update) = rx.try_recv() {
        if let TimerUpdate::Remaining(secs) = update {
            displayed.push(format_clock(secs));
        }
    }
    assert_eq!(displayed, vec!["00:02", "00:01"]);
}
