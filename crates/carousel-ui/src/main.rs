//! WASM entry point
//!
//! Trunk compiles this to WASM; it attaches the carousel to the card page the
//! script is loaded into.

fn main() {
    carousel_ui::start();
}
