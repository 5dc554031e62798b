//! Explicitly wired application state: one repository per resource, built once at startup.

use crate::config::SystemInfo;
use crate::entities::{
    Articles, HelpRequest, MenuItemReview, RecommendationRequest, UCSBDate, UCSBDiningCommons,
    UCSBDiningCommonsMenuItems, UCSBOrganizations,
};
use crate::handlers::resource::Repo;
use crate::repository::{InMemoryRepository, PgRepository};
use sqlx::PgPool;
use std::sync::Arc;

/// Backing store the repositories were built on.
#[derive(Clone)]
pub enum Storage {
    Postgres(PgPool),
    Memory,
}

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub system_info: SystemInfo,
    pub menu_item_reviews: Repo<MenuItemReview>,
    pub dining_commons_menu_items: Repo<UCSBDiningCommonsMenuItems>,
    pub organizations: Repo<UCSBOrganizations>,
    pub recommendation_requests: Repo<RecommendationRequest>,
    pub articles: Repo<Articles>,
    pub help_requests: Repo<HelpRequest>,
    pub dates: Repo<UCSBDate>,
    pub dining_commons: Repo<UCSBDiningCommons>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        AppState {
            system_info: SystemInfo::default(),
            menu_item_reviews: Arc::new(PgRepository::<MenuItemReview>::new(pool.clone())),
            dining_commons_menu_items: Arc::new(PgRepository::<UCSBDiningCommonsMenuItems>::new(pool.clone())),
            organizations: Arc::new(PgRepository::<UCSBOrganizations>::new(pool.clone())),
            recommendation_requests: Arc::new(PgRepository::<RecommendationRequest>::new(pool.clone())),
            articles: Arc::new(PgRepository::<Articles>::new(pool.clone())),
            help_requests: Arc::new(PgRepository::<HelpRequest>::new(pool.clone())),
            dates: Arc::new(PgRepository::<UCSBDate>::new(pool.clone())),
            dining_commons: Arc::new(PgRepository::<UCSBDiningCommons>::new(pool.clone())),
            storage: Storage::Postgres(pool),
        }
    }

    /// Empty process-local tables.
    pub fn in_memory() -> Self {
        AppState {
            storage: Storage::Memory,
            system_info: SystemInfo::default(),
            menu_item_reviews: Arc::new(InMemoryRepository::<MenuItemReview>::new()),
            dining_commons_menu_items: Arc::new(InMemoryRepository::<UCSBDiningCommonsMenuItems>::new()),
            organizations: Arc::new(InMemoryRepository::<UCSBOrganizations>::new()),
            recommendation_requests: Arc::new(InMemoryRepository::<RecommendationRequest>::new()),
            articles: Arc::new(InMemoryRepository::<Articles>::new()),
            help_requests: Arc::new(InMemoryRepository::<HelpRequest>::new()),
            dates: Arc::new(InMemoryRepository::<UCSBDate>::new()),
            dining_commons: Arc::new(InMemoryRepository::<UCSBDiningCommons>::new()),
        }
    }

    pub fn with_system_info(self, system_info: SystemInfo) -> Self {
        AppState { system_info, ..self }
    }
}
