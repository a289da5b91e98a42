// preview - Render the glow field headlessly
//
// Runs the simulation for a number of frames at 60fps timestamps and writes
// the final frame as a PNG. Useful for eyeballing the effect, or a tuning
// change, without a browser.
//
// Usage: cargo run --bin preview -- [--width N] [--height N] [--frames N] [--seed N] [--out PATH]

use std::env;

use glow_engine::GlowWorld;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut width = 1280u32;
    let mut height = 720u32;
    let mut frames = 120u64;
    let mut seed = 0u32;
    let mut out = String::from("preview.png");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => { width = args.get(i+1).and_then(|s| s.parse().ok()).unwrap_or(1280); i += 2; }
            "--height" => { height = args.get(i+1).and_then(|s| s.parse().ok()).unwrap_or(720); i += 2; }
            "--frames" => { frames = args.get(i+1).and_then(|s| s.parse().ok()).unwrap_or(120); i += 2; }
            "--seed" => { seed = args.get(i+1).and_then(|s| s.parse().ok()).unwrap_or(0); i += 2; }
            "--out" => { if let Some(path) = args.get(i+1) { out = path.clone(); } i += 2; }
            _ => i += 1,
        }
    }

    println!("Rendering {frames} frames at {width}x{height}...");

    let mut world = GlowWorld::new(width, height, seed);
    for frame in 0..frames {
        world.tick(frame as f64 * FRAME_MS);
    }

    let image = image::RgbaImage::from_raw(width, height, world.pixels().to_vec())
        .expect("framebuffer matches surface dimensions");
    if let Err(e) = image.save(&out) {
        eprintln!("Failed to write {out}: {e}");
        std::process::exit(1);
    }

    println!("Wrote {out}");
}
