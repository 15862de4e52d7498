use anyhow::Result;
use clara_blog::application::{
    commands::auth::TokenLifetimes,
    ports::{
        feed::ArticleFeed,
        sanitizer::HtmlSanitizer,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    seo::SiteProfile,
    services::ApplicationServices,
};
use clara_blog::config::AppConfig;
use clara_blog::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    user::{Account, AccountRepository, Email, PasswordHash, Role, UserId},
};
use clara_blog::infrastructure::{
    database,
    feed::BroadcastArticleFeed,
    repositories::{PostgresArticleReadRepository, PostgresArticleWriteRepository},
    sanitizer::AmmoniaSanitizer,
    security::{
        accounts::ConfiguredAccountRepository, password::Argon2PasswordHasher,
        token::BiscuitTokenManager,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use clara_blog::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool));

    let admin_uid = UserId::new(config.admin().uid.as_str())?;
    let admin_account = Account {
        uid: admin_uid.clone(),
        email: Email::new(config.admin().email.as_str())?,
        password_hash: PasswordHash::new(config.admin().password_hash.as_str())?,
        role: Role::Admin,
    };
    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(ConfiguredAccountRepository::new(vec![admin_account]));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> =
        Arc::new(BiscuitTokenManager::new(config.biscuit_private_key())?);
    let sanitizer: Arc<dyn HtmlSanitizer> = Arc::new(AmmoniaSanitizer);
    let feed: Arc<dyn ArticleFeed> = Arc::new(BroadcastArticleFeed::new(config.feed_capacity()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let site = SiteProfile::new(config.site_base_url())
        .with_analytics_share_url(config.analytics_share_url().map(str::to_string));
    let lifetimes = TokenLifetimes {
        admin: config.token_ttl(),
        anonymous: config.anonymous_token_ttl(),
    };

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        account_repo,
        password_hasher,
        token_manager,
        sanitizer,
        feed,
        clock,
        slugger,
        site,
        admin_uid,
        lifetimes,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        origins = ?config.allowed_origins(),
        "listening on {address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
