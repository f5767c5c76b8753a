//! Main application entry point.

fn main() {
    env_logger::init();
    log::info!("Starting DragSlider demo");

    let config = dragslider_app::AppConfig::from_args(std::env::args().skip(1));
    if let Err(e) = pollster::block_on(dragslider_app::App::run(config)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
