use raves_web::App;

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    dioxus::launch(App);
}
