//! Item repository
//!
//! Typed operations for the `items` table, run inside the caller's session:
//! - list: newest id first, fresh read every call
//! - get: absence is `Ok(None)`, not an error
//! - update/delete: a missing id is `StoreError::NotFound`

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::any::AnyRow;
use sqlx::Row;

use crate::db::{Session, StoreError};
use crate::models::{Item, ItemInput};

const RESOURCE: &str = "item";

// Prices travel as text in both directions so the decimal value is rebuilt
// exactly. Placeholders are `$N`, which SQLite and PostgreSQL both accept.
const SELECT_ITEM: &str = "SELECT id, name, description, CAST(price AS TEXT) AS price FROM items";

/// Item repository
pub struct ItemRepo<'a> {
    session: &'a mut Session,
}

impl<'a> ItemRepo<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// All items, highest id first. Empty when the table is empty.
    pub async fn list_all_desc(&mut self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(&format!("{} ORDER BY id DESC", SELECT_ITEM))
            .fetch_all(self.session.conn())
            .await?;

        let items = rows
            .iter()
            .map(item_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Get a single item by id.
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<Item>, StoreError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_ITEM))
            .bind(id)
            .fetch_optional(self.session.conn())
            .await?;

        Ok(row.as_ref().map(item_from_row).transpose()?)
    }

    /// Insert a new item and return the id the store assigned.
    pub async fn insert(&mut self, input: &ItemInput) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar(
            "INSERT INTO items (name, description, price) \
             VALUES ($1, $2, CAST($3 AS NUMERIC)) RETURNING id",
        )
        .bind(input.name.as_str())
        .bind(input.description.as_deref())
        .bind(price_text(input.price))
        .fetch_one(self.session.conn())
        .await?;

        Ok(id)
    }

    /// Overwrite name, description and price of an existing item. A single
    /// statement, so the write lock is taken without a prior read.
    pub async fn update_fields(&mut self, id: i64, input: &ItemInput) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE items SET name = $1, description = $2, price = CAST($3 AS NUMERIC) WHERE id = $4",
        )
        .bind(input.name.as_str())
        .bind(input.description.as_deref())
        .bind(price_text(input.price))
        .bind(id)
        .execute(self.session.conn())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(RESOURCE, id));
        }
        Ok(())
    }

    /// Hard delete.
    pub async fn delete_by_id(&mut self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(self.session.conn())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(RESOURCE, id));
        }
        Ok(())
    }
}

fn price_text(price: Option<Decimal>) -> Option<String> {
    price.map(|p| p.to_string())
}

fn item_from_row(row: &AnyRow) -> Result<Item, sqlx::Error> {
    let price = row
        .try_get::<Option<String>, _>("price")?
        .map(|text| {
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))
        })
        .transpose()?;

    Ok(Item {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use crate::models::ItemName;
    use tempfile::TempDir;

    async fn store(dir: &TempDir) -> Store {
        let url = format!("sqlite://{}", dir.path().join("repo.db").display());
        let store = Store::connect(&url).await.unwrap();
        store.create_schema_if_absent().await.unwrap();
        store
    }

    fn input(name: &str, price: Option<&str>) -> ItemInput {
        ItemInput {
            name: ItemName::new(name).unwrap(),
            description: None,
            price: price.map(|p| Decimal::from_str(p).unwrap()),
        }
    }

    async fn insert(store: &Store, input: &ItemInput) -> i64 {
        let mut session = store.session().await.unwrap();
        let id = ItemRepo::new(&mut session).insert(input).await.unwrap();
        session.commit().await.unwrap();
        id
    }

    #[tokio::test]
    async fn insert_then_get() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        let id = insert(&store, &input("Lamp", None)).await;

        let mut session = store.session().await.unwrap();
        let item = ItemRepo::new(&mut session).get_by_id(id).await.unwrap().unwrap();
        assert_eq!(
            item,
            Item {
                id,
                name: "Lamp".into(),
                description: None,
                price: None,
            }
        );
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        let mut session = store.session().await.unwrap();
        assert!(ItemRepo::new(&mut session).get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        let mut session = store.session().await.unwrap();
        assert!(ItemRepo::new(&mut session).list_all_desc().await.unwrap().is_empty());
        drop(session);

        let first = insert(&store, &input("one", None)).await;
        let second = insert(&store, &input("two", None)).await;
        let third = insert(&store, &input("three", None)).await;

        let mut session = store.session().await.unwrap();
        let ids: Vec<i64> = ItemRepo::new(&mut session)
            .list_all_desc()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![third, second, first]);
    }

    #[tokio::test]
    async fn price_round_trips_exactly() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        for text in ["19.99", "0.10", "20.00", "99999999.99", "0.01"] {
            let id = insert(&store, &input("priced", Some(text))).await;

            let mut session = store.session().await.unwrap();
            let item = ItemRepo::new(&mut session).get_by_id(id).await.unwrap().unwrap();
            assert_eq!(item.price, Some(Decimal::from_str(text).unwrap()), "{text}");
        }
    }

    #[tokio::test]
    async fn update_overwrites_fields() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        let id = insert(&store, &input("Lamp", Some("5.00"))).await;

        let changed = ItemInput {
            name: ItemName::new("Floor lamp").unwrap(),
            description: Some("Tall".into()),
            price: None,
        };
        let mut session = store.session().await.unwrap();
        ItemRepo::new(&mut session).update_fields(id, &changed).await.unwrap();
        session.commit().await.unwrap();

        let mut session = store.session().await.unwrap();
        let item = ItemRepo::new(&mut session).get_by_id(id).await.unwrap().unwrap();
        assert_eq!(item.name, "Floor lamp");
        assert_eq!(item.description.as_deref(), Some("Tall"));
        assert_eq!(item.price, None);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        let mut session = store.session().await.unwrap();
        let err = ItemRepo::new(&mut session)
            .update_fields(7, &input("Lamp", None))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_item() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        let id = insert(&store, &input("Lamp", None)).await;

        let mut session = store.session().await.unwrap();
        ItemRepo::new(&mut session).delete_by_id(id).await.unwrap();
        session.commit().await.unwrap();

        let mut session = store.session().await.unwrap();
        let mut repo = ItemRepo::new(&mut session);
        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert!(repo.list_all_desc().await.unwrap().is_empty());
        assert!(repo.delete_by_id(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        let first = insert(&store, &input("Lamp", None)).await;

        let mut session = store.session().await.unwrap();
        ItemRepo::new(&mut session).delete_by_id(first).await.unwrap();
        session.commit().await.unwrap();

        let second = insert(&store, &input("Lamp", None)).await;
        assert!(second > first);
    }

    #[tokio::test]
    async fn oversize_name_is_rejected_by_store() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        let mut session = store.session().await.unwrap();
        let err = ItemRepo::new(&mut session)
            .insert(&input(&"x".repeat(121), None))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));

        let ok = ItemRepo::new(&mut session)
            .insert(&input(&"x".repeat(120), None))
            .await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        let id = insert(&store, &input("Lamp", None)).await;

        store.create_schema_if_absent().await.unwrap();
        store.create_schema_if_absent().await.unwrap();

        let mut session = store.session().await.unwrap();
        let items = ItemRepo::new(&mut session).list_all_desc().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
    }
}
