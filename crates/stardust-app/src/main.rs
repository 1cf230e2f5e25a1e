use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod demo;

fn main() {
    // Init logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter("info")
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Stardust starting");
    if let Err(e) = demo::run() {
        eprintln!("Stardust error: {e}");
    }
}
