//! Menu taxonomy management: categories, subcategories and the mapping rows
//! pairing them. A subcategory is created and linked to its categories in a
//! single transaction; updating a subcategory replaces its links wholesale.

use db::models::{menu_category, menu_category_link, menu_subcategory};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;

use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct SubcategoryInput {
    pub name: String,
    pub active: bool,
    pub category_ids: Vec<i64>,
}

/// Subcategory joined with the categories it is filed under.
#[derive(Debug, Serialize)]
pub struct SubcategoryView {
    pub subcategory: menu_subcategory::Model,
    pub categories: Vec<menu_category::Model>,
}

pub async fn create_category(
    db: &DatabaseConnection,
    name: &str,
    active: bool,
) -> Result<menu_category::Model, ServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::validation("category name must not be empty"));
    }

    let created = menu_category::ActiveModel {
        name: Set(name.to_owned()),
        active: Set(active),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!(category_id = created.id, "menu category created");
    Ok(created)
}

pub async fn update_category(
    db: &DatabaseConnection,
    category_id: i64,
    name: &str,
    active: bool,
) -> Result<menu_category::Model, ServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::validation("category name must not be empty"));
    }

    let existing = menu_category::Entity::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("menu category not found"))?;

    let mut active_model: menu_category::ActiveModel = existing.into();
    active_model.name = Set(name.to_owned());
    active_model.active = Set(active);
    Ok(active_model.update(db).await?)
}

/// Removes a category; its mapping rows go with it.
pub async fn delete_category(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<(), ServiceError> {
    let existing = menu_category::Entity::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("menu category not found"))?;

    existing.delete(db).await?;
    Ok(())
}

pub async fn list_categories(
    db: &DatabaseConnection,
) -> Result<Vec<menu_category::Model>, ServiceError> {
    Ok(menu_category::Entity::find()
        .order_by_desc(menu_category::Column::Id)
        .all(db)
        .await?)
}

/// Creates a subcategory plus one link row per category, all or nothing.
pub async fn create_subcategory(
    db: &DatabaseConnection,
    input: SubcategoryInput,
) -> Result<SubcategoryView, ServiceError> {
    let (name, category_ids) = validate_subcategory_input(&input)?;

    let txn = db.begin().await?;

    let categories = load_categories(&txn, &category_ids).await?;

    let subcategory = menu_subcategory::ActiveModel {
        name: Set(name),
        active: Set(input.active),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for category in &categories {
        menu_category_link::ActiveModel {
            category_id: Set(category.id),
            subcategory_id: Set(subcategory.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    tracing::info!(subcategory_id = subcategory.id, "menu subcategory created");
    Ok(SubcategoryView {
        subcategory,
        categories,
    })
}

/// Rewrites a subcategory and replaces its category links with the given set.
pub async fn update_subcategory(
    db: &DatabaseConnection,
    subcategory_id: i64,
    input: SubcategoryInput,
) -> Result<SubcategoryView, ServiceError> {
    let (name, category_ids) = validate_subcategory_input(&input)?;

    let txn = db.begin().await?;

    let existing = menu_subcategory::Entity::find_by_id(subcategory_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("menu subcategory not found"))?;

    let categories = load_categories(&txn, &category_ids).await?;

    let mut active_model: menu_subcategory::ActiveModel = existing.into();
    active_model.name = Set(name);
    active_model.active = Set(input.active);
    let subcategory = active_model.update(&txn).await?;

    menu_category_link::Entity::delete_many()
        .filter(menu_category_link::Column::SubcategoryId.eq(subcategory.id))
        .exec(&txn)
        .await?;
    for category in &categories {
        menu_category_link::ActiveModel {
            category_id: Set(category.id),
            subcategory_id: Set(subcategory.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    Ok(SubcategoryView {
        subcategory,
        categories,
    })
}

pub async fn delete_subcategory(
    db: &DatabaseConnection,
    subcategory_id: i64,
) -> Result<(), ServiceError> {
    let existing = menu_subcategory::Entity::find_by_id(subcategory_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("menu subcategory not found"))?;

    existing.delete(db).await?;
    Ok(())
}

pub async fn list_subcategories(
    db: &DatabaseConnection,
) -> Result<Vec<SubcategoryView>, ServiceError> {
    let rows = menu_subcategory::Entity::find()
        .find_with_related(menu_category::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(subcategory, categories)| SubcategoryView {
            subcategory,
            categories,
        })
        .collect())
}

pub async fn subcategories_for_category(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Vec<menu_subcategory::Model>, ServiceError> {
    let category = menu_category::Entity::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("menu category not found"))?;

    Ok(category
        .find_related(menu_subcategory::Entity)
        .order_by_asc(menu_subcategory::Column::Name)
        .all(db)
        .await?)
}

fn validate_subcategory_input(input: &SubcategoryInput) -> Result<(String, Vec<i64>), ServiceError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ServiceError::validation(
            "subcategory name must not be empty",
        ));
    }
    if input.category_ids.is_empty() {
        return Err(ServiceError::validation(
            "a subcategory needs at least one category",
        ));
    }

    let mut category_ids = input.category_ids.clone();
    category_ids.sort_unstable();
    category_ids.dedup();
    Ok((name.to_owned(), category_ids))
}

async fn load_categories<C: sea_orm::ConnectionTrait>(
    db: &C,
    category_ids: &[i64],
) -> Result<Vec<menu_category::Model>, ServiceError> {
    let mut categories = Vec::with_capacity(category_ids.len());
    for category_id in category_ids {
        let category = menu_category::Entity::find_by_id(*category_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found(format!("menu category {category_id} not found"))
            })?;
        categories.push(category);
    }
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::test_utils::setup_test_db;

    fn subcategory(name: &str, category_ids: Vec<i64>) -> SubcategoryInput {
        SubcategoryInput {
            name: name.to_owned(),
            active: true,
            category_ids,
        }
    }

    #[tokio::test]
    async fn creating_a_subcategory_links_its_categories() {
        let db = setup_test_db().await;
        let starters = create_category(&db, "Starters", true).await.unwrap();
        let buffet = create_category(&db, "Buffet", true).await.unwrap();

        let view = create_subcategory(
            &db,
            subcategory("Soups", vec![starters.id, buffet.id]),
        )
        .await
        .unwrap();

        assert_eq!(view.categories.len(), 2);

        let listed = list_subcategories(&db).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].subcategory.name, "Soups");
        assert_eq!(listed[0].categories.len(), 2);
    }

    #[tokio::test]
    async fn unknown_category_leaves_no_subcategory_behind() {
        let db = setup_test_db().await;
        let starters = create_category(&db, "Starters", true).await.unwrap();

        let err = create_subcategory(&db, subcategory("Soups", vec![starters.id, 9999]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let rows = menu_subcategory::Entity::find().all(&db).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn updating_a_subcategory_replaces_its_links() {
        let db = setup_test_db().await;
        let starters = create_category(&db, "Starters", true).await.unwrap();
        let mains = create_category(&db, "Mains", true).await.unwrap();

        let view = create_subcategory(&db, subcategory("Grills", vec![starters.id]))
            .await
            .unwrap();

        let updated = update_subcategory(
            &db,
            view.subcategory.id,
            subcategory("Braai", vec![mains.id]),
        )
        .await
        .unwrap();
        assert_eq!(updated.subcategory.name, "Braai");
        assert_eq!(updated.categories.len(), 1);
        assert_eq!(updated.categories[0].id, mains.id);

        let under_starters = subcategories_for_category(&db, starters.id).await.unwrap();
        assert!(under_starters.is_empty());
        let under_mains = subcategories_for_category(&db, mains.id).await.unwrap();
        assert_eq!(under_mains.len(), 1);
    }

    #[tokio::test]
    async fn blank_names_and_empty_category_sets_are_rejected() {
        let db = setup_test_db().await;
        let starters = create_category(&db, "Starters", true).await.unwrap();

        let err = create_category(&db, "   ", true).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = create_subcategory(&db, subcategory("  ", vec![starters.id]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = create_subcategory(&db, subcategory("Soups", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn deleting_a_category_drops_its_links_but_not_the_subcategory() {
        let db = setup_test_db().await;
        let starters = create_category(&db, "Starters", true).await.unwrap();
        let mains = create_category(&db, "Mains", true).await.unwrap();
        create_subcategory(&db, subcategory("Soups", vec![starters.id, mains.id]))
            .await
            .unwrap();

        delete_category(&db, starters.id).await.unwrap();

        let links = menu_category_link::Entity::find().all(&db).await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].category_id, mains.id);

        let listed = list_subcategories(&db).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].categories.len(), 1);
    }
}
