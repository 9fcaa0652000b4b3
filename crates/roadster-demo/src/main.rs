use anyhow::Result;
use winit::dpi::LogicalSize;

use roadster_engine::device::GpuInit;
use roadster_engine::logging::{init_logging, LoggingConfig};
use roadster_engine::window::{Runtime, RuntimeConfig};

mod app;

use app::DemoApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("roadster: WASD to drive, F for the doors, arrows for lift, Esc to quit");

    Runtime::run(
        RuntimeConfig {
            title: "Roadster".to_string(),
            initial_size: LogicalSize::new(960.0, 720.0),
        },
        GpuInit::default(),
        DemoApp::new(),
    )
}
