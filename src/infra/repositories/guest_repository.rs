//! Guest repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};

use super::conflict_on_constraint;
use super::entities::guest::{self, ActiveModel, Entity as GuestEntity};
use common::{AppError, AppResult};
use domain::{Guest, NewGuest};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Guest repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Find guest by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Guest>>;

    /// Find guest by phone number
    async fn find_by_phone(&self, phone_number: &str) -> AppResult<Option<Guest>>;

    /// List all guests ordered by ID
    async fn list(&self) -> AppResult<Vec<Guest>>;

    /// Create a new guest
    async fn create(&self, guest: NewGuest) -> AppResult<Guest>;

    /// Delete the guest with this phone number, returning the affected row count
    async fn delete_by_phone(&self, phone_number: &str) -> AppResult<u64>;
}

/// Concrete implementation of GuestRepository
pub struct GuestStore {
    db: DatabaseConnection,
}

impl GuestStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GuestRepository for GuestStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Guest>> {
        let result = GuestEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Guest::from))
    }

    async fn find_by_phone(&self, phone_number: &str) -> AppResult<Option<Guest>> {
        find_by_phone(&self.db, phone_number).await
    }

    async fn list(&self) -> AppResult<Vec<Guest>> {
        let models = GuestEntity::find()
            .order_by_asc(guest::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Guest::from).collect())
    }

    async fn create(&self, guest: NewGuest) -> AppResult<Guest> {
        let active_model = ActiveModel {
            id: NotSet,
            last_name: Set(guest.last_name),
            first_name: Set(guest.first_name),
            phone_number: Set(guest.phone_number),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| conflict_on_constraint(e, "guest with this phone number already exists"))?;
        Ok(Guest::from(model))
    }

    async fn delete_by_phone(&self, phone_number: &str) -> AppResult<u64> {
        let result = GuestEntity::delete_many()
            .filter(guest::Column::PhoneNumber.eq(phone_number))
            .exec(&self.db)
            .await
            .map_err(|e| conflict_on_constraint(e, "guest has bookings and cannot be deleted"))?;

        Ok(result.rows_affected)
    }
}

/// Transaction-bound guest repository.
pub struct TxGuestRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxGuestRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Find guest by phone number inside the transaction
    pub async fn find_by_phone(&self, phone_number: &str) -> AppResult<Option<Guest>> {
        find_by_phone(self.txn, phone_number).await
    }
}

async fn find_by_phone<C: ConnectionTrait>(conn: &C, phone_number: &str) -> AppResult<Option<Guest>> {
    let result = GuestEntity::find()
        .filter(guest::Column::PhoneNumber.eq(phone_number))
        .one(conn)
        .await
        .map_err(AppError::from)?;

    Ok(result.map(Guest::from))
}
