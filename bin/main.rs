use orbit_lib::*;

fn main() {
    env_logger::init();
    if let Err(e) = launch(DemoConfig::octagon()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
