mod app;
mod io;
mod model;

use app::{configure_fonts, ReviewApp};
use review_ai_common::layout::PAGE_TITLE;

fn main() -> eframe::Result<()> {
    review_ai_rust::init_environment(false);

    let startup = io::load_startup();
    if let Err(err) = &startup {
        log::error!("startup failed: {err:#}");
    }

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        PAGE_TITLE,
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(ReviewApp::new(startup))
        }),
    )
}
