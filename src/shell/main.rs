use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use storefront_cart::shared::infrastructure::cart_storage::file::FileCartStorage;
use storefront_cart::shared::infrastructure::notifications::tracing_sink::TracingNotificationSink;
use storefront_cart::shared::infrastructure::storefront_api::http::HttpStorefrontApi;
use storefront_cart::shell::build_state;
use storefront_cart::shell::config::AppConfig;
use storefront_cart::shell::graphql::{AppSchema, schema};
use storefront_cart::shell::http::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    tracing::info!(?config, "starting cart service");

    let storage = Arc::new(FileCartStorage::new(&config.storage_dir));
    let api = Arc::new(HttpStorefrontApi::new(&config.api_url, config.api_timeout)?);
    let state = build_state(
        &config.storage_key,
        storage,
        api.clone(),
        api,
        Arc::new(TracingNotificationSink),
    )
    .await;

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .merge(router(state))
        .layer(TraceLayer::new_for_http());

    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
