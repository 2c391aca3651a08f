#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::*;
    use portfolio_site::config::RelayConfig;
    use portfolio_site::relay::{RelayClient, GLOBAL_RELAY};
    use tower::ServiceBuilder;
    use tower_http::trace::TraceLayer;

    portfolio_site::logger::init_server_logger();

    match RelayConfig::from_env().map(RelayClient::new) {
        Ok(Ok(relay)) => {
            tracing::info!(endpoint = relay.endpoint(), "contact form relay configured");
            let _ = GLOBAL_RELAY.set(relay);
        }
        Ok(Err(err)) => tracing::error!(%err, "couldn't build contact form relay client"),
        Err(err) => tracing::warn!(%err, "contact form relay disabled"),
    }

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shutdown");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
