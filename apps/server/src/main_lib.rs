use std::sync::Arc;

use rand::{rngs::OsRng, RngCore};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::auth::{Argon2PasswordHasher, AuthManager};
use crate::config::Config;
use fintrack_core::{
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    users::{UserService, UserServiceTrait},
};
use fintrack_storage_sqlite::{
    db::{self, spawn_writer},
    CategoryRepository, ExpenseRepository, UserRepository,
};

pub struct AppState {
    pub auth: Arc<AuthManager>,
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub category_service: Arc<dyn CategoryServiceTrait + Send + Sync>,
    pub expense_service: Arc<dyn ExpenseServiceTrait + Send + Sync>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait + Send + Sync>,
    pub report_service: Arc<dyn ReportServiceTrait + Send + Sync>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn resolve_jwt_secret(config: &Config) -> Vec<u8> {
    match &config.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            tracing::warn!(
                "FT_JWT_SECRET is not set; using a random key. Tokens will not survive a restart."
            );
            let mut secret = vec![0u8; 32];
            OsRng.fill_bytes(&mut secret);
            secret
        }
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone())?;

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let expense_repo = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));

    let auth = Arc::new(AuthManager::new(
        &resolve_jwt_secret(config),
        config.token_ttl,
    ));

    let user_service = Arc::new(UserService::new(
        user_repo,
        Arc::new(Argon2PasswordHasher),
        auth.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(category_repo.clone()));
    category_service.seed_default_categories().await?;
    let expense_service = Arc::new(ExpenseService::new(expense_repo.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(
        expense_repo.clone(),
        category_repo.clone(),
    ));
    let report_service = Arc::new(ReportService::new(expense_repo, category_repo));

    Ok(Arc::new(AppState {
        auth,
        user_service,
        category_service,
        expense_service,
        analytics_service,
        report_service,
    }))
}
