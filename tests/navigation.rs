//! End-to-end navigation scenarios against the library API.

use std::time::{Duration, Instant};

use section_nav::core::{
    dispatcher::InputDispatcher,
    gesture::Gesture,
    location::Location,
    section::{SectionId, SectionList, SITE_SECTION_IDS},
    surface::Surface,
    transition::{FrameOutcome, Navigator, DEFAULT_DURATION},
};
use section_nav::ui::surface::TerminalSurface;

fn site() -> SectionList {
    SectionList::new(SITE_SECTION_IDS.iter().copied()).unwrap()
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Feed 60 fps frames until the navigator goes idle; returns the time of
/// the last frame relative to `t0`.
fn settle(nav: &mut Navigator, surface: &mut TerminalSurface, t0: Instant) -> Duration {
    let mut at = Duration::ZERO;
    loop {
        match nav.tick(t0 + at, surface) {
            FrameOutcome::Continue(p) => {
                assert!(p <= 0.0);
                at += ms(16);
            }
            FrameOutcome::Finished(_) => return at,
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn skills_hash_targets_minus_two_hundred() {
    let sections = site();
    assert_eq!(sections.target_position(&SectionId::from_hash("skills")), -200);
    assert_eq!(sections.index_of(&SectionId::from_hash("skills")), Some(2));
}

#[test]
fn about_back_to_landing() {
    let t0 = Instant::now();
    let mut surface = TerminalSurface::new(4, 80, 24);
    let mut nav = Navigator::new(site(), DEFAULT_DURATION);

    // Settle on #about first.
    nav.handle_hash_change("about", &mut surface);
    settle(&mut nav, &mut surface, t0);
    assert_eq!(surface.current_position(), -100);
    assert!(surface.is_nav_active(1));

    let t1 = t0 + ms(5_000);
    nav.handle_hash_change("landing", &mut surface);
    assert!(surface.is_nav_active(0));
    assert!(!surface.is_nav_active(1));

    let last = settle(&mut nav, &mut surface, t1);
    assert!(last >= DEFAULT_DURATION && last < DEFAULT_DURATION + ms(16));
    assert_eq!(surface.current_position(), 0);
    assert_eq!(surface.active_index(), Some(0));
    assert!(surface.content_layout(0).active);
    assert!(!surface.content_layout(1).active);
}

#[test]
fn redirect_mid_flight_starts_from_live_position() {
    let t0 = Instant::now();
    let mut surface = TerminalSurface::new(4, 80, 24);
    let mut nav = Navigator::new(site(), DEFAULT_DURATION);

    let first = nav.handle_hash_change("contact", &mut surface);
    nav.tick(t0, &mut surface);
    nav.tick(t0 + ms(600), &mut surface);
    let mid = surface.current_position();
    assert!((-300..0).contains(&mid));

    nav.handle_hash_change("about", &mut surface);
    assert_eq!(nav.frame(first, t0 + ms(616), &mut surface), FrameOutcome::Stale);
    assert_eq!(surface.current_position(), mid);

    settle(&mut nav, &mut surface, t0 + ms(616));
    assert_eq!(surface.current_position(), -100);
}

#[test]
fn wheel_burst_yields_one_navigation_per_window() {
    let t0 = Instant::now();
    let sections = site();
    let mut dispatcher = InputDispatcher::new(DEFAULT_DURATION);
    let mut location = Location::default();
    let mut navigations = 0;

    // 3 windows' worth of wheel events, one every 50 ms.
    for i in 0..72 {
        let now = t0 + ms(i * 50);
        let next = dispatcher.dispatch(
            Gesture::Wheel { delta_y: 1.0 },
            now,
            &sections,
            location.hash(),
            false,
        );
        if let Some(hash) = next {
            assert!(location.set_hash(&hash));
            navigations += 1;
        }
    }
    assert_eq!(navigations, 3);
    assert_eq!(location.hash(), "contact");
}

#[test]
fn horizontal_swipe_never_navigates() {
    let t0 = Instant::now();
    let sections = site();
    let mut dispatcher = InputDispatcher::new(DEFAULT_DURATION);

    for (i, (dx, dy)) in [(8.0, 2.0), (-8.0, -2.0), (5.0, -4.9), (-5.0, 4.9)]
        .into_iter()
        .enumerate()
    {
        let now = t0 + ms(i as u64 * 2_000);
        dispatcher.dispatch(Gesture::TouchStart { x: 40.0, y: 12.0 }, now, &sections, "about", false);
        let next = dispatcher.dispatch(
            Gesture::TouchMove { x: 40.0 + dx, y: 12.0 + dy },
            now,
            &sections,
            "about",
            false,
        );
        assert_eq!(next, None, "dx={dx} dy={dy}");
    }
}

#[test]
fn unknown_hash_settles_on_first_section() {
    let t0 = Instant::now();
    let mut surface = TerminalSurface::new(4, 80, 24);
    let mut nav = Navigator::new(site(), DEFAULT_DURATION);
    nav.handle_hash_change("skills", &mut surface);
    settle(&mut nav, &mut surface, t0);

    nav.handle_hash_change("nowhere", &mut surface);
    settle(&mut nav, &mut surface, t0 + ms(5_000));
    assert_eq!(surface.current_position(), 0);
    assert_eq!(surface.active_index(), None);
}
