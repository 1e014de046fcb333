//! Block Debris
//!
//! Sandbox variant where broken blocks burst into falling debris. Movement
//! refuses blocked steps and snaps onto the column height; the integrator
//! runs at a fixed 60 Hz tick.
//!
//! Controls: WASD move, Space jump, 1-4 block type, left click place,
//! right click break, Backspace toggle mouse capture, F11 fullscreen,
//! ESC exit.

use block_sandbox_engine::SandboxConfig;
use block_sandbox_engine::app;

const CONFIG_FILE: &str = "block_debris.json";

fn main() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    log::info!("Block Debris starting");
    let config = SandboxConfig::load_or(CONFIG_FILE, SandboxConfig::block_debris());

    if let Err(e) = app::run(config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
