//! Block World
//!
//! Textured-cube sandbox: broken blocks fade out.
//!
//! Controls: WASD move, Space jump, 1-4 block type, left click place,
//! right click break, Backspace toggle mouse capture, F11 fullscreen,
//! ESC exit.

use block_sandbox_engine::SandboxConfig;
use block_sandbox_engine::app;

const CONFIG_FILE: &str = "block_world.json";

fn main() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    log::info!("Block World starting");
    let config = SandboxConfig::load_or(CONFIG_FILE, SandboxConfig::block_world());

    if let Err(e) = app::run(config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
