//! Cartlink client entry point.
//!
//! Boots the app core headlessly: restores the session, applies an
//! optional cold-start deep link passed as the first argument, and
//! reports where navigation landed. A UI layer replaces the final print
//! with its render loop over `app.state`.

use client::app::{App, ThemeMode};
use client::core::ClientConfig;
use client::logging;

#[tokio::main]
async fn main() {
    let config = ClientConfig::from_env();
    let _log_guard = logging::init(&config.data_dir);

    tracing::info!(api = %config.api_base_url, "Starting Cartlink client");

    let mut app = App::new(&config, ThemeMode::Light);
    app.bootstrap().await;

    // Cold-start deep link, e.g. `cartlink 'cartlink://joinList/ABC123'`
    if let Some(url) = std::env::args().nth(1) {
        if client::app::parse_deep_link(&url).is_some() {
            app.handle_deep_link(url);
            app.next_event().await;
        } else {
            tracing::warn!(url = %url, "Ignoring unrecognized launch URL");
        }
    }

    let state = app.state.read();
    println!("session: {:?}", state.session.phase);
    println!("screen:  {}", state.current_screen.title());
    for notice in &state.notices {
        println!("{}: {}", notice.title, notice.message);
    }
}
