use tracing::Level;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logger already initialized: {e}");
    }

    dioxus::launch(kvdesk_web::App);
}
