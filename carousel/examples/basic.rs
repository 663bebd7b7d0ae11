// Example: minimal usage with clamped navigation and pagination.
use carousel::{Carousel, CarouselOptions};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(7)
            .with_visible_slides(3)
            .with_on_change(Some(|i| println!("on_change: active_index={i}"))),
    );

    println!("visible_range={:?}", c.visible_range());
    println!("pages={:?}", c.page_layout().pages);

    c.next();
    c.go_to(100); // clamps to max_index
    println!(
        "after go_to(100): active_index={} can_go_next={} can_go_prev={}",
        c.active_index(),
        c.can_go_next(),
        c.can_go_prev()
    );

    // A breakpoint change shows fewer slides at once.
    c.set_visible_slides(1);
    println!("after set_visible_slides(1): visible_range={:?}", c.visible_range());

    c.go_to_page(0);
    println!("current_page={:?}", c.current_page());
}
