mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let http_client = startup::setup_reqwest_client()?;

        tracing::info!(
            "Starting server, proxying bot API requests to {}",
            config.bot_api_url
        );

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router().with_state(AppState::new(http_client, &config));
        router = router.merge(server_routes);

        Ok(router)
    })
}
