//! Library-level tests that drive a whole session: spin, reveal, brew.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

use roastitect::catalog::Catalog;
use roastitect::models::GrinderId;
use roastitect::session::{Session, SessionEvent};
use roastitect::wheel::{segment_under_pointer, SpinTuning};

fn session(grinder: GrinderId) -> Session {
    Session::new(Catalog::load().unwrap(), SpinTuning::default(), grinder)
}

#[test]
fn test_spin_then_brew_to_completion() {
    let tuning = SpinTuning::default();
    let mut session = session(GrinderId::Comandante);
    let mut rng = StdRng::seed_from_u64(11);
    let start = Instant::now();

    let plan = session.spin(&mut rng, start).expect("idle wheel should spin");
    assert!(session.spin(&mut rng, start).is_none(), "second spin is ignored");
    assert!(session.update(start + tuning.spin_duration() / 2).is_empty());

    let settled = start + tuning.spin_duration();
    let events = session.update(settled);
    let winner = session
        .catalog()
        .get_by_index(plan.winner_index)
        .unwrap()
        .id
        .clone();
    assert_eq!(
        events,
        vec![SessionEvent::ProfileSelected {
            profile_id: winner.clone()
        }]
    );
    assert_eq!(
        segment_under_pointer(plan.target_rotation, session.wheel().segments()),
        plan.winner_index
    );

    let revealed = settled + tuning.reveal_delay();
    assert_eq!(session.update(revealed), vec![SessionEvent::RevealResults]);
    assert!(session.update(revealed + Duration::from_secs(5)).is_empty());

    let total = session.timer().total();
    assert_eq!(session.steps().iter().map(|s| s.duration).sum::<u32>(), total);
    assert!(session.toggle_timer(revealed));
    assert_eq!(session.active_step_index(), Some(0));

    let done = revealed + Duration::from_secs(u64::from(total));
    assert_eq!(session.update(done), vec![SessionEvent::TimerFinished]);
    assert_eq!(session.timer().remaining(), 0);
    assert!(!session.timer().is_running());
    assert_eq!(session.active_step_index(), None);

    // A finished timer stays put
    assert!(session.update(done + Duration::from_secs(30)).is_empty());
    assert_eq!(session.timer().remaining(), 0);
}

#[test]
fn test_respin_while_brewing_resets_timer() {
    let tuning = SpinTuning::default();
    let mut session = session(GrinderId::TimemoreC3s);
    let mut rng = StdRng::seed_from_u64(3);
    session.select_profile("french-press").unwrap();

    let start = Instant::now();
    session.toggle_timer(start);
    session.update(start + Duration::from_secs(10));
    assert_eq!(session.timer().remaining(), 230);

    let spun_at = start + Duration::from_secs(10);
    session.spin(&mut rng, spun_at).unwrap();
    session.update(spun_at + tuning.spin_duration());

    let profile = session.selected_profile().unwrap();
    assert_eq!(session.timer().remaining(), profile.brew_time);
    assert!(!session.timer().is_running());
}

#[test]
fn test_grinder_switch_updates_calibration_and_journey() {
    let mut session = session(GrinderId::Comandante);
    session.select_profile("espresso").unwrap();
    assert_eq!(session.calibration().unwrap().ticks, 6);

    session.set_grinder(GrinderId::Kingrinder);
    assert_eq!(session.calibration().unwrap().ticks, 40);
    let journey = session.journey();
    assert!(journey.iter().any(|stage| stage.description.contains("Kingrinder K6")));
}
