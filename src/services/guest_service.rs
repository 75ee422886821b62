//! Guest service - registration, lookup and removal of guests.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Guest, NewGuest};

use crate::infra::UnitOfWork;

/// Message returned when deleting a guest that does not exist
pub const NO_SUCH_GUEST: &str = "there is no user with this phone number";

#[async_trait]
pub trait GuestService: Send + Sync {
    /// Register a guest; the phone number must be unused
    async fn register(&self, guest: NewGuest) -> AppResult<Guest>;

    async fn get_guest(&self, id: i32) -> AppResult<Guest>;

    async fn get_guest_by_phone(&self, phone_number: &str) -> AppResult<Guest>;

    async fn list_guests(&self) -> AppResult<Vec<Guest>>;

    /// Delete the guest with this phone number
    async fn delete_guest(&self, phone_number: &str) -> AppResult<()>;
}

pub struct GuestManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> GuestManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> GuestService for GuestManager<U> {
    async fn register(&self, guest: NewGuest) -> AppResult<Guest> {
        // Field formats are validated by the handler's ValidatedJson extractor
        if self
            .uow
            .guests()
            .find_by_phone(&guest.phone_number)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "guest with this phone number already exists",
            ));
        }

        let created = self.uow.guests().create(guest).await?;
        tracing::info!(guest_id = created.id, "Guest registered");
        Ok(created)
    }

    async fn get_guest(&self, id: i32) -> AppResult<Guest> {
        self.uow.guests().find_by_id(id).await?.ok_or_not_found("guest")
    }

    async fn get_guest_by_phone(&self, phone_number: &str) -> AppResult<Guest> {
        self.uow
            .guests()
            .find_by_phone(phone_number)
            .await?
            .ok_or_not_found("guest")
    }

    async fn list_guests(&self) -> AppResult<Vec<Guest>> {
        self.uow.guests().list().await
    }

    async fn delete_guest(&self, phone_number: &str) -> AppResult<()> {
        let deleted = self.uow.guests().delete_by_phone(phone_number).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(NO_SUCH_GUEST.to_string()));
        }
        tracing::info!("Guest deleted");
        Ok(())
    }
}
