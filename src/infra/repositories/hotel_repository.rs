//! Hotel repository. Hotels are always loaded together with their address.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, NotSet, Order, QueryFilter, QueryOrder, Set,
};

use super::conflict_on_constraint;
use super::entities::{address, hotel};
use common::{AppError, AppResult, OptionExt};
use domain::{Hotel, HotelFilter, HotelSortField, NewHotel, SortOrder};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to hotels. Writes go through [`TxHotelRepository`] because
/// every hotel write touches the address row as well.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// List hotels matching the filter, in the requested order
    async fn list(&self, filter: &HotelFilter) -> AppResult<Vec<Hotel>>;

    /// Find hotel by ID with its address
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Hotel>>;
}

/// Concrete implementation of HotelRepository
pub struct HotelStore {
    db: DatabaseConnection,
}

impl HotelStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HotelRepository for HotelStore {
    async fn list(&self, filter: &HotelFilter) -> AppResult<Vec<Hotel>> {
        let mut query = hotel::Entity::find().find_also_related(address::Entity);

        if let Some(country) = &filter.country {
            query = query.filter(address::Column::Country.eq(country.as_str()));
        }
        if let Some(city) = &filter.city {
            query = query.filter(address::Column::City.eq(city.as_str()));
        }

        let order = match filter.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        query = match filter.sort_by {
            HotelSortField::Id => query.order_by(hotel::Column::Id, order),
            HotelSortField::Name => query
                .order_by(hotel::Column::Name, order)
                .order_by_asc(hotel::Column::Id),
            HotelSortField::StarsCount => query
                .order_by(hotel::Column::StarsCount, order)
                .order_by_asc(hotel::Column::Id),
        };

        let rows = query.all(&self.db).await.map_err(AppError::from)?;

        rows.into_iter()
            .map(|(hotel, address)| with_address(hotel, address))
            .collect()
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Hotel>> {
        find_by_id(&self.db, id).await
    }
}

/// Transaction-bound hotel repository handling hotel and address writes together.
pub struct TxHotelRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxHotelRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert the address, then the hotel referencing it
    pub async fn create(&self, new_hotel: NewHotel) -> AppResult<Hotel> {
        let address = address::ActiveModel {
            id: NotSet,
            country: Set(new_hotel.address.country),
            city: Set(new_hotel.address.city),
            street: Set(new_hotel.address.street),
            house: Set(new_hotel.address.house),
        }
        .insert(self.txn)
        .await
        .map_err(AppError::from)?;

        let hotel = hotel::ActiveModel {
            id: NotSet,
            name: Set(new_hotel.name),
            address_id: Set(address.id),
            stars_count: Set(new_hotel.stars_count),
            description: Set(new_hotel.description),
            header_image_address: Set(new_hotel.header_image_address),
        }
        .insert(self.txn)
        .await
        .map_err(AppError::from)?;

        Ok(hotel.into_domain(address))
    }

    /// Overwrite the hotel row and its owned address row
    pub async fn update(&self, id: i32, changes: NewHotel) -> AppResult<Hotel> {
        let address_id = self.address_id(id).await?;

        let address = address::ActiveModel {
            id: Set(address_id),
            country: Set(changes.address.country),
            city: Set(changes.address.city),
            street: Set(changes.address.street),
            house: Set(changes.address.house),
        }
        .update(self.txn)
        .await
        .map_err(AppError::from)?;

        let hotel = hotel::ActiveModel {
            id: Set(id),
            name: Set(changes.name),
            address_id: Set(address_id),
            stars_count: Set(changes.stars_count),
            description: Set(changes.description),
            header_image_address: Set(changes.header_image_address),
        }
        .update(self.txn)
        .await
        .map_err(AppError::from)?;

        Ok(hotel.into_domain(address))
    }

    /// Delete the hotel, then its address
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let address_id = self.address_id(id).await?;

        hotel::Entity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(|e| conflict_on_constraint(e, "hotel has apartments and cannot be deleted"))?;

        address::Entity::delete_by_id(address_id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn address_id(&self, hotel_id: i32) -> AppResult<i32> {
        let hotel = hotel::Entity::find_by_id(hotel_id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?
            .ok_or_not_found("hotel")?;

        Ok(hotel.address_id)
    }
}

async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<Option<Hotel>> {
    let row = hotel::Entity::find_by_id(id)
        .find_also_related(address::Entity)
        .one(conn)
        .await
        .map_err(AppError::from)?;

    row.map(|(hotel, address)| with_address(hotel, address))
        .transpose()
}

fn with_address(hotel: hotel::Model, address: Option<address::Model>) -> AppResult<Hotel> {
    let address = address.ok_or_else(|| {
        AppError::internal(format!("hotel {} has no address row", hotel.id))
    })?;
    Ok(hotel.into_domain(address))
}
