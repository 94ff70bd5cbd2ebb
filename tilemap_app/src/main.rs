//! OpenGL Tilemap
//!
//! Opens the 800 x 600 tilemap window and clears it until closed.

use std::process::ExitCode;

use tilemap_engine::prelude::*;

fn main() -> ExitCode {
    foundation::logging::init();

    let config = BootstrapConfig::default();
    let result = bootstrap::run(GlfwPlatform::init, config);

    if let Err(e) = &result {
        log::debug!("Bootstrap failed: {e:?}");
        eprintln!("{e}");
    }

    ExitCode::from(bootstrap::exit_status(&result))
}
