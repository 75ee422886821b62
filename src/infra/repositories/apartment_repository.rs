//! Apartment repository.
//!
//! Apartments are read through a join with their hotel and class so that
//! listings carry the hotel name and the class name without extra queries.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, FromQueryResult, JoinType, NotSet, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select, Set,
};

use super::conflict_on_constraint;
use super::entities::{apartment, apartment_class, hotel};
use common::{AppError, AppResult};
use domain::{Apartment, ApartmentClass, ApartmentFilter, HotelRef, NewApartment};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Apartment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ApartmentRepository: Send + Sync {
    /// Find apartment by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Apartment>>;

    /// List apartments matching the filter, ordered by ID
    async fn list(&self, filter: &ApartmentFilter) -> AppResult<Vec<Apartment>>;

    /// List the free apartments of a hotel
    async fn list_free_by_hotel(&self, hotel_id: i32) -> AppResult<Vec<Apartment>>;

    /// Create a free apartment
    async fn create(&self, apartment: NewApartment) -> AppResult<Apartment>;

    /// Delete apartment by ID, returning the affected row count
    async fn delete(&self, id: i32) -> AppResult<u64>;
}

/// Flat join row: apartment columns plus hotel name and class name.
#[derive(Debug, FromQueryResult)]
struct ApartmentRow {
    id: i32,
    name: String,
    is_free: bool,
    bed_count: i32,
    price_per_night: i32,
    hotel_id: i32,
    hotel_name: String,
    apartment_class_id: i32,
    class_name: String,
}

impl From<ApartmentRow> for Apartment {
    fn from(row: ApartmentRow) -> Self {
        Apartment {
            id: row.id,
            name: row.name,
            hotel: HotelRef {
                id: row.hotel_id,
                name: row.hotel_name,
            },
            apartment_class: ApartmentClass {
                id: row.apartment_class_id,
                class_name: row.class_name,
            },
            is_free: row.is_free,
            bed_count: row.bed_count,
            price_per_night: row.price_per_night,
        }
    }
}

/// Concrete implementation of ApartmentRepository
pub struct ApartmentStore {
    db: DatabaseConnection,
}

impl ApartmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ApartmentRepository for ApartmentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Apartment>> {
        find_by_id(&self.db, id).await
    }

    async fn list(&self, filter: &ApartmentFilter) -> AppResult<Vec<Apartment>> {
        let mut query = joined();
        if let Some(hotel_id) = filter.hotel_id {
            query = query.filter(apartment::Column::HotelId.eq(hotel_id));
        }
        if let Some(is_free) = filter.is_free {
            query = query.filter(apartment::Column::IsFree.eq(is_free));
        }
        if let Some(bed_count) = filter.bed_count {
            query = query.filter(apartment::Column::BedCount.eq(bed_count));
        }
        if let Some(class_name) = &filter.class_name {
            query = query.filter(apartment_class::Column::ClassName.eq(class_name.as_str()));
        }

        fetch_all(&self.db, query).await
    }

    async fn list_free_by_hotel(&self, hotel_id: i32) -> AppResult<Vec<Apartment>> {
        let query = joined()
            .filter(apartment::Column::HotelId.eq(hotel_id))
            .filter(apartment::Column::IsFree.eq(true));

        fetch_all(&self.db, query).await
    }

    async fn create(&self, new_apartment: NewApartment) -> AppResult<Apartment> {
        let model = apartment::ActiveModel {
            id: NotSet,
            name: Set(new_apartment.name),
            hotel_id: Set(new_apartment.hotel_id),
            apartment_class_id: Set(new_apartment.apartment_class_id),
            is_free: Set(true),
            bed_count: Set(new_apartment.bed_count),
            price_per_night: Set(new_apartment.price_per_night),
        }
        .insert(&self.db)
        .await
        .map_err(AppError::from)?;

        find_by_id(&self.db, model.id).await?.ok_or_else(|| {
            AppError::internal(format!("apartment {} vanished after insert", model.id))
        })
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = apartment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| conflict_on_constraint(e, "apartment has bookings and cannot be deleted"))?;

        Ok(result.rows_affected)
    }
}

/// Transaction-bound apartment repository used by the booking workflow.
pub struct TxApartmentRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxApartmentRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Apartment>> {
        find_by_id(self.txn, id).await
    }

    /// Flip `is_free` to false only if it is still true.
    ///
    /// Returns `false` when the apartment was already booked (or does not exist).
    pub async fn reserve(&self, id: i32) -> AppResult<bool> {
        let result = apartment::Entity::update_many()
            .col_expr(apartment::Column::IsFree, Expr::value(false))
            .filter(apartment::Column::Id.eq(id))
            .filter(apartment::Column::IsFree.eq(true))
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected == 1)
    }
}

/// Apartments joined with hotel and class, selected as [`ApartmentRow`] columns.
fn joined() -> Select<apartment::Entity> {
    apartment::Entity::find()
        .select_only()
        .column(apartment::Column::Id)
        .column(apartment::Column::Name)
        .column(apartment::Column::IsFree)
        .column(apartment::Column::BedCount)
        .column(apartment::Column::PricePerNight)
        .column(apartment::Column::HotelId)
        .column_as(hotel::Column::Name, "hotel_name")
        .column(apartment::Column::ApartmentClassId)
        .column(apartment_class::Column::ClassName)
        .join(JoinType::InnerJoin, apartment::Relation::Hotel.def())
        .join(JoinType::InnerJoin, apartment::Relation::ApartmentClass.def())
}

async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<Option<Apartment>> {
    let row = joined()
        .filter(apartment::Column::Id.eq(id))
        .into_model::<ApartmentRow>()
        .one(conn)
        .await
        .map_err(AppError::from)?;

    Ok(row.map(Apartment::from))
}

async fn fetch_all<C: ConnectionTrait>(
    conn: &C,
    query: Select<apartment::Entity>,
) -> AppResult<Vec<Apartment>> {
    let rows = query
        .order_by_asc(apartment::Column::Id)
        .into_model::<ApartmentRow>()
        .all(conn)
        .await
        .map_err(AppError::from)?;

    Ok(rows.into_iter().map(Apartment::from).collect())
}
