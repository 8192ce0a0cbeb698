use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use pong_bitplane::core::{
    render_rectangle, BitPlane, BouncePolicy, FrameDriver, MemorySink, Rectangle,
};
use pong_bitplane::types::{InputSignal, Vector2i};
use pong_bitplane::{Game, RunConfig};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test so no other test thread allocates while counting is on.
#[test]
fn frame_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut driver = FrameDriver::with_policy(BouncePolicy);
    driver.scene_mut().ball.velocity = Vector2i::new(1, 1);
    driver.on_input(InputSignal::START);
    let mut sink = MemorySink::new();
    let mut plane = BitPlane::new();

    let mut game = Game::new(&RunConfig::default());
    let mut game_sink = MemorySink::new();
    game.tick(InputSignal::START, &mut game_sink);

    let allocs = with_alloc_counting(|| {
        for _ in 0..500 {
            let _ = driver.update();
            let _ = driver.render(&mut sink);
        }

        for i in 0..50 {
            render_rectangle(&Rectangle::new(i - 5, i / 2 - 3, 7, 3), &mut plane);
        }

        for i in 0..500 {
            let signal = if i % 3 == 0 {
                InputSignal::UP
            } else {
                InputSignal::DOWN
            };
            let _ = game.tick(signal, &mut game_sink);
        }
    });

    assert!(allocs == 0);
}
