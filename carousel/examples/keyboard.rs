// Example: feeding key identifiers from a UI toolkit through the key mapper.
use carousel::{Carousel, CarouselOptions, map_key};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(5).with_loop(true));

    for key in ["ArrowRight", "ArrowRight", "Tab", "End", "ArrowRight", "ArrowLeft", "Home"] {
        match map_key(key) {
            Some(intent) => {
                let moved = c.apply_intent(intent);
                println!(
                    "{key:>10} -> {intent:?}: moved={moved} active_index={}",
                    c.active_index()
                );
            }
            None => println!("{key:>10} -> ignored"),
        }
    }
}
