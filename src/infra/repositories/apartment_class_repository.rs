//! Read-only access to the apartment class lookup table.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::apartment_class::{self, Entity as ApartmentClassEntity};
use common::{AppError, AppResult};
use domain::ApartmentClass;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ApartmentClassRepository: Send + Sync {
    /// List all classes ordered by ID
    async fn list(&self) -> AppResult<Vec<ApartmentClass>>;

    /// Find class by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<ApartmentClass>>;
}

pub struct ApartmentClassStore {
    db: DatabaseConnection,
}

impl ApartmentClassStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ApartmentClassRepository for ApartmentClassStore {
    async fn list(&self) -> AppResult<Vec<ApartmentClass>> {
        let models = ApartmentClassEntity::find()
            .order_by_asc(apartment_class::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ApartmentClass::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<ApartmentClass>> {
        let result = ApartmentClassEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ApartmentClass::from))
    }
}
