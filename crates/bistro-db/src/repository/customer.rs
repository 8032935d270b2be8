//! # Customer Repository
//!
//! Customers are written once, when an order is paid for, and never updated.

use bistro_core::validation::validate_customer_name;
use bistro_core::{Customer, NewCustomer};
use sqlx::{SqliteExecutor, SqlitePool};
use tracing::debug;

use crate::error::DbResult;

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a customer and returns it with its new id.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - Stored customer
    /// * `Err(DbError::InvalidInput)` - Blank or overlong name
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<Customer> {
        insert_customer(&self.pool, customer).await
    }

    /// Gets a customer by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        find_customer(&self.pool, id).await
    }

    /// Counts customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

pub(crate) async fn insert_customer<'e, E>(executor: E, customer: &NewCustomer) -> DbResult<Customer>
where
    E: SqliteExecutor<'e>,
{
    validate_customer_name(&customer.name)?;

    let result = sqlx::query("INSERT INTO Customers (name, address, contact_info) VALUES (?1, ?2, ?3)")
        .bind(&customer.name)
        .bind(&customer.address)
        .bind(&customer.contact_info)
        .execute(executor)
        .await?;

    let id = result.last_insert_rowid();
    debug!(id, "Inserted customer");

    Ok(Customer {
        id,
        name: customer.name.clone(),
        address: customer.address.clone(),
        contact_info: customer.contact_info.clone(),
    })
}

pub(crate) async fn find_customer<'e, E>(executor: E, id: i64) -> DbResult<Option<Customer>>
where
    E: SqliteExecutor<'e>,
{
    let customer = sqlx::query_as::<_, Customer>(
        "SELECT id, name, address, contact_info FROM Customers WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(customer)
}
