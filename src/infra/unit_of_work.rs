//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Owns the pooled repositories, built once at startup
//! - Runs closures inside a database transaction (commit on `Ok`, rollback on `Err`)
//! - Hands transaction-bound repositories to those closures

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::repositories::{
    ApartmentClassRepository, ApartmentClassStore, ApartmentImageRepository, ApartmentImageStore,
    ApartmentRepository, ApartmentStore, BookingRepository, BookingStore, GuestRepository,
    GuestStore, HotelRepository, HotelStore, TxApartmentRepository, TxBookingRepository,
    TxGuestRepository, TxHotelRepository,
};
use common::{AppError, AppResult};

/// Boxed future returned by transaction closures.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable with `automock` because of the generic `transaction` method.
/// Service tests provide a hand-written implementation over mocked repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn guests(&self) -> Arc<dyn GuestRepository>;

    fn hotels(&self) -> Arc<dyn HotelRepository>;

    fn apartments(&self) -> Arc<dyn ApartmentRepository>;

    fn apartment_classes(&self) -> Arc<dyn ApartmentClassRepository>;

    fn apartment_images(&self) -> Arc<dyn ApartmentImageRepository>;

    fn bookings(&self) -> Arc<dyn BookingRepository>;

    /// Execute a closure within a ReadCommitted transaction.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Repository access scoped to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn guests(&self) -> TxGuestRepository<'a> {
        TxGuestRepository::new(self.txn)
    }

    pub fn hotels(&self) -> TxHotelRepository<'a> {
        TxHotelRepository::new(self.txn)
    }

    pub fn apartments(&self) -> TxApartmentRepository<'a> {
        TxApartmentRepository::new(self.txn)
    }

    pub fn bookings(&self) -> TxBookingRepository<'a> {
        TxBookingRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    guest_repo: Arc<GuestStore>,
    hotel_repo: Arc<HotelStore>,
    apartment_repo: Arc<ApartmentStore>,
    apartment_class_repo: Arc<ApartmentClassStore>,
    apartment_image_repo: Arc<ApartmentImageStore>,
    booking_repo: Arc<BookingStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            guest_repo: Arc::new(GuestStore::new(db.clone())),
            hotel_repo: Arc::new(HotelStore::new(db.clone())),
            apartment_repo: Arc::new(ApartmentStore::new(db.clone())),
            apartment_class_repo: Arc::new(ApartmentClassStore::new(db.clone())),
            apartment_image_repo: Arc::new(ApartmentImageStore::new(db.clone())),
            booking_repo: Arc::new(BookingStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn guests(&self) -> Arc<dyn GuestRepository> {
        self.guest_repo.clone()
    }

    fn hotels(&self) -> Arc<dyn HotelRepository> {
        self.hotel_repo.clone()
    }

    fn apartments(&self) -> Arc<dyn ApartmentRepository> {
        self.apartment_repo.clone()
    }

    fn apartment_classes(&self) -> Arc<dyn ApartmentClassRepository> {
        self.apartment_class_repo.clone()
    }

    fn apartment_images(&self) -> Arc<dyn ApartmentImageRepository> {
        self.apartment_image_repo.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.booking_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Run a block inside `UnitOfWork::transaction` without spelling out the boxing.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
