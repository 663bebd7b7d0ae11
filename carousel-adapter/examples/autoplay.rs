use carousel::CarouselOptions;
use carousel_adapter::{Controller, Slide};

fn main() {
    // Example: an adapter-owned frame loop driving auto-play.
    //
    // An adapter would:
    // - call tick(now_ms) from its frame loop / timer
    // - forward hover/focus events to pause/resume
    // - re-render using the carousel state whenever tick returns Some
    let slides: Vec<Slide<&str>> = ["intro", "features", "pricing", "faq"]
        .into_iter()
        .map(|s| Slide::new(s).with_label(s))
        .collect();

    let mut c = Controller::new(
        CarouselOptions::new(slides.len())
            .with_loop(true)
            .with_auto_play(true)
            .with_auto_play_interval_ms(1000),
        0,
    );

    let mut now_ms = 0u64;
    while now_ms < 6000 {
        now_ms += 16;

        if now_ms == 2512 {
            println!("t={now_ms} pointer enter");
            c.on_pointer_enter();
        }
        if now_ms == 3504 {
            println!("t={now_ms} pointer leave");
            c.on_pointer_leave(now_ms);
        }

        if let Some(index) = c.tick(now_ms) {
            let active: Vec<&str> = c
                .slide_views(&slides)
                .filter(|v| v.is_active)
                .map(|v| *v.content)
                .collect();
            println!("t={now_ms} active_index={index} showing={active:?}");
        }
    }

    println!("dots={:?}", c.pagination_dots());
}
