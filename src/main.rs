use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nihongo_drill::{app, config::AppConfig, db, state::AppState};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nihongo_drill=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = AppConfig::load();
  let pool = db::init_db(&config.database_path).expect("Failed to initialize database");

  {
    let conn = db::try_lock(&pool).expect("Database lock failed during startup");
    let sentences = config
      .seed_path
      .as_deref()
      .and_then(db::load_seed_bank)
      .unwrap_or_else(db::builtin_sentences);
    let seeded = db::seed_sentences(&conn, &sentences).expect("Failed to seed sentences");
    if seeded > 0 {
      tracing::info!("Seeded {} sentences", seeded);
    }
  }

  let app = app::build_router(AppState::new(pool));

  let bind_addr = config.bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://{}", bind_addr);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
