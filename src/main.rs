//! Standalone inspect/fly camera viewer.
//!
//! Usage: `viewcam [OPTIONS.toml]`

use std::path::Path;

use viewcam::{options::Options, viewer::Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    log::info!("Press 'f' for fly mode, 'i' for inspect mode");
    log::info!("Hold left Alt and move the mouse to look around");

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
