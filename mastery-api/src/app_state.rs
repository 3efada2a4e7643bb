use std::sync::Arc;

use sqlx::PgPool;
use time::Weekday;

use crate::domain::services::{RecordService, ReportService};
use crate::repositories::{GoalRepositoryImpl, RecordRepositoryImpl, UserRepositoryImpl};

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<RecordService<RecordRepositoryImpl, GoalRepositoryImpl>>,
    pub reports: Arc<ReportService<RecordRepositoryImpl, GoalRepositoryImpl>>,
    pub goals: Arc<GoalRepositoryImpl>,
    pub users: Arc<UserRepositoryImpl>,
}

impl AppState {
    pub fn new(db_pool: PgPool, week_start: Weekday) -> Self {
        let record_repo = Arc::new(RecordRepositoryImpl::new(db_pool.clone()));
        let goal_repo = Arc::new(GoalRepositoryImpl::new(db_pool.clone()));
        let user_repo = Arc::new(UserRepositoryImpl::new(db_pool));

        Self {
            records: Arc::new(RecordService::new(record_repo.clone(), goal_repo.clone())),
            reports: Arc::new(ReportService::new(record_repo, goal_repo.clone(), week_start)),
            goals: goal_repo,
            users: user_repo,
        }
    }
}
