use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use carousel::{CarouselOptions, NavigationIntent};
use core::sync::atomic::{AtomicUsize, Ordering};

fn auto_play_options(count: usize) -> CarouselOptions {
    CarouselOptions::new(count)
        .with_auto_play(true)
        .with_auto_play_interval_ms(6000)
}

#[test]
fn auto_play_advances_once_per_interval() {
    let mut c = Controller::new(auto_play_options(4), 0);
    assert!(c.is_auto_playing());
    assert_eq!(c.next_auto_advance_ms(), Some(6000));

    assert_eq!(c.tick(16), None);
    assert_eq!(c.tick(5999), None);
    assert_eq!(c.tick(6000), Some(1));
    assert_eq!(c.tick(6016), None);
    assert_eq!(c.carousel().active_index(), 1);
    assert_eq!(c.tick(12000), Some(2));
}

#[test]
fn pause_cancels_and_resume_starts_fresh_interval() {
    let mut c = Controller::new(auto_play_options(4), 0);
    assert_eq!(c.tick(6000), Some(1));

    c.pause();
    assert!(!c.is_auto_playing());
    assert_eq!(c.tick(12000), None);
    assert_eq!(c.tick(30000), None);
    assert_eq!(c.carousel().active_index(), 1);

    c.resume(31000);
    assert_eq!(c.carousel().active_index(), 1);
    assert_eq!(c.next_auto_advance_ms(), Some(37000));
    assert_eq!(c.tick(36999), None);
    assert_eq!(c.tick(37000), Some(2));
}

#[test]
fn resume_without_pause_keeps_pending_deadline() {
    let mut c = Controller::new(auto_play_options(4), 0);
    c.resume(4000);
    assert_eq!(c.next_auto_advance_ms(), Some(6000));
    c.on_blur(5000);
    assert_eq!(c.tick(6000), Some(1));
}

#[test]
fn hover_and_focus_pause_auto_play() {
    let mut c = Controller::new(auto_play_options(4), 0);
    c.on_pointer_enter();
    assert!(c.carousel().is_paused());
    assert_eq!(c.tick(7000), None);
    c.on_pointer_leave(7000);
    assert!(!c.carousel().is_paused());

    c.on_focus();
    assert_eq!(c.tick(13000), None);
    c.on_blur(13000);
    assert_eq!(c.tick(19000), Some(1));
}

#[test]
fn auto_play_needs_more_than_one_page() {
    let mut c = Controller::new(auto_play_options(2).with_visible_slides(2), 0);
    assert!(!c.is_auto_playing());
    assert_eq!(c.tick(60000), None);

    // Adding a slide makes a second page; the timer arms from that moment.
    c.set_item_count(3, 1000);
    assert_eq!(c.next_auto_advance_ms(), Some(7000));
    assert_eq!(c.tick(7000), Some(1));

    c.set_visible_slides(3, 8000);
    assert!(!c.is_auto_playing());
}

#[test]
fn reconfiguring_interval_rearms() {
    let mut c = Controller::new(auto_play_options(4), 0);
    c.set_auto_play_interval_ms(1000, 500);
    assert_eq!(c.next_auto_advance_ms(), Some(1500));
    assert_eq!(c.tick(1500), Some(1));

    c.set_auto_play(false, 2000);
    assert!(!c.is_auto_playing());
    assert_eq!(c.tick(10000), None);

    c.update_options(|o| o.auto_play = true, 10000);
    assert_eq!(c.next_auto_advance_ms(), Some(11000));
}

#[test]
fn direct_carousel_changes_rearm_on_next_tick() {
    let mut c = Controller::new(auto_play_options(4), 0);
    c.carousel_mut().set_auto_play_interval_ms(2000);
    // The stale deadline (6000) must not fire; the tick re-arms instead.
    assert_eq!(c.tick(6000), None);
    assert_eq!(c.next_auto_advance_ms(), Some(8000));
    assert_eq!(c.tick(8000), Some(1));

    c.carousel_mut().pause();
    assert_eq!(c.tick(10000), None);
    assert!(!c.is_auto_playing());
}

#[test]
fn resume_after_direct_pause_starts_fresh_interval() {
    let mut c = Controller::new(auto_play_options(4), 0);
    c.carousel_mut().pause();
    c.resume(5000);
    assert_eq!(c.next_auto_advance_ms(), Some(11000));
    assert_eq!(c.tick(6000), None);
    assert_eq!(c.tick(11000), Some(1));
}

#[test]
fn pause_after_direct_pause_cancels_stale_deadline() {
    let mut c = Controller::new(auto_play_options(4), 0);
    c.carousel_mut().pause();
    c.pause();
    assert!(!c.is_auto_playing());
    assert_eq!(c.tick(6000), None);
}

#[test]
fn manual_navigation_does_not_reset_timer() {
    let mut c = Controller::new(auto_play_options(4), 0);
    assert!(c.next());
    assert_eq!(c.next_auto_advance_ms(), Some(6000));
    assert_eq!(c.tick(6000), Some(2));
}

#[test]
fn late_tick_advances_once_and_stays_on_grid() {
    let mut c = Controller::new(auto_play_options(10).with_loop(true), 0);
    assert_eq!(c.tick(20000), Some(1));
    assert_eq!(c.next_auto_advance_ms(), Some(24000));
    assert_eq!(c.tick(24000), Some(2));
}

#[test]
fn auto_play_without_loop_stops_at_the_end() {
    let calls = Arc::new(AtomicUsize::new(0));
    let opts = auto_play_options(3).with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    let mut c = Controller::new(opts, 0);
    assert_eq!(c.tick(6000), Some(1));
    assert_eq!(c.tick(12000), Some(2));
    assert_eq!(c.tick(18000), None);
    assert_eq!(c.carousel().active_index(), 2);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn auto_play_with_loop_wraps() {
    let mut c = Controller::new(auto_play_options(2).with_loop(true), 0);
    assert_eq!(c.tick(6000), Some(1));
    assert_eq!(c.tick(12000), Some(0));
}

#[test]
fn teardown_cancels_pending_tick() {
    let mut c = Controller::new(auto_play_options(4), 0);
    c.cancel_auto_play();
    c.cancel_auto_play();
    assert_eq!(c.tick(6000), None);

    let c = Controller::new(auto_play_options(4), 0);
    let carousel = c.into_carousel();
    assert_eq!(carousel.active_index(), 0);
}

#[test]
fn keys_drive_navigation() {
    let mut c = Controller::new(CarouselOptions::new(5).with_visible_slides(2), 0);
    assert!(c.on_key("ArrowRight"));
    assert_eq!(c.carousel().active_index(), 1);
    assert!(c.on_key("End"));
    assert_eq!(c.carousel().active_index(), 3);
    assert!(c.on_key("ArrowRight"));
    assert_eq!(c.carousel().active_index(), 3);
    assert!(c.on_key("Home"));
    assert_eq!(c.carousel().active_index(), 0);
    assert!(c.on_key("ArrowLeft"));
    assert_eq!(c.carousel().active_index(), 0);
    assert!(!c.on_key("Enter"));
    assert!(c.apply_intent(NavigationIntent::GoTo(2)));
}

#[test]
fn arrow_controls_follow_bounds() {
    let mut c = Controller::new(CarouselOptions::new(4), 0);
    assert_eq!(
        c.arrow_controls(),
        Some(ArrowControls {
            prev_enabled: false,
            next_enabled: true,
        })
    );
    c.go_to(3);
    assert_eq!(
        c.arrow_controls(),
        Some(ArrowControls {
            prev_enabled: true,
            next_enabled: false,
        })
    );

    c.set_display_options(DisplayOptions::default().with_arrows(false));
    assert_eq!(c.arrow_controls(), None);

    let c = Controller::new(CarouselOptions::new(2).with_visible_slides(2), 0);
    assert_eq!(c.arrow_controls(), None);
}

#[test]
fn pagination_dots_and_page_click() {
    let mut c = Controller::new(CarouselOptions::new(4).with_visible_slides(2), 0);
    let dots = c.pagination_dots();
    assert_eq!(dots.len(), 2);
    assert_eq!(dots[0].label, "Go to slide 1");
    assert_eq!(dots[1].label, "Go to slide 3");
    assert!(dots[0].is_current);

    assert!(c.go_to_page(dots[1].page));
    assert_eq!(c.carousel().active_index(), 2);
    let dots = c.pagination_dots();
    assert!(!dots[0].is_current);
    assert!(dots[1].is_current);

    let c = Controller::new(CarouselOptions::new(4).with_visible_slides(2), 0)
        .with_display_options(DisplayOptions::default().with_indicators(false));
    assert!(c.pagination_dots().is_empty());

    let c = Controller::new(CarouselOptions::new(3).with_visible_slides(3), 0);
    assert!(c.pagination_dots().is_empty());
}

#[test]
fn slide_views_mark_visible_slides() {
    let slides: Vec<Slide<&str>> = ["a", "b", "c", "d"]
        .into_iter()
        .enumerate()
        .map(|(i, s)| Slide::new(s).with_label(alloc::format!("Slide {}", i + 1)))
        .collect();

    let mut c = Controller::new(CarouselOptions::new(0).with_visible_slides(2), 0);
    c.sync_slides(&slides, 0);
    assert_eq!(c.carousel().item_count(), 4);
    c.next();

    let views: Vec<_> = c.slide_views(&slides).collect();
    let active: Vec<usize> = views.iter().filter(|v| v.is_active).map(|v| v.index).collect();
    assert_eq!(active, [1, 2]);
    assert_eq!(views[0].position, 1);
    assert_eq!(views[3].set_size, 4);
    assert_eq!(views[2].label, Some("Slide 3"));
    assert_eq!(*views[2].content, "c");
}

#[test]
fn slide_views_tolerate_stale_count() {
    let slides = [Slide::new(1u8), Slide::new(2u8), Slide::new(3u8)];
    let c = Controller::new(CarouselOptions::new(2), 0);
    let active: Vec<bool> = c.slide_views(&slides).map(|v| v.is_active).collect();
    assert_eq!(active, [true, false, false]);

    let empty: [Slide<String>; 0] = [];
    assert_eq!(c.slide_views(&empty).count(), 0);
}

#[test]
fn auto_play_poll_skips_missed_deadlines() {
    let mut t = AutoPlay::new(100, 0);
    assert_eq!(t.interval_ms, 1);
    assert!(t.poll(101));
    assert!(!t.poll(101));

    let mut t = AutoPlay::new(0, 1000);
    assert_eq!(t.remaining_ms(250), 750);
    assert!(!t.poll(999));
    assert!(t.poll(3500));
    assert_eq!(t.due_ms, 4000);
    assert!(!t.is_due(3999));
}

#[test]
fn auto_play_poll_tolerates_zero_interval() {
    let mut t = AutoPlay {
        interval_ms: 0,
        due_ms: 10,
    };
    assert!(!t.poll(9));
    assert!(t.poll(20));
    assert_eq!(t.due_ms, 21);
    assert!(!t.poll(20));
}
