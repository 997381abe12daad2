use chrono::Utc;
use db::models::user::{self, ApprovalStatus, UserRole};
use db::models::{menu_item, service};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_MOBILE: AtomicU32 = AtomicU32::new(0);

pub async fn seed_user(
    db: &DatabaseConnection,
    name: &str,
    role: UserRole,
    approval_status: ApprovalStatus,
    active: bool,
) -> user::Model {
    let now = Utc::now();
    user::ActiveModel {
        name: Set(name.to_owned()),
        email: Set(format!("{name}@example.com")),
        mobile: Set(format!("0820000{:03}", NEXT_MOBILE.fetch_add(1, Ordering::Relaxed))),
        password_hash: Set(user::Model::hash_password("password")),
        address: Set(None),
        role: Set(role),
        approval_status: Set(approval_status),
        active: Set(active),
        approved_by: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed user")
}

pub async fn seed_customer(db: &DatabaseConnection, name: &str) -> user::Model {
    seed_user(db, name, UserRole::Customer, ApprovalStatus::Approved, true).await
}

pub async fn seed_chef(db: &DatabaseConnection, name: &str) -> user::Model {
    seed_user(db, name, UserRole::Chef, ApprovalStatus::Approved, true).await
}

pub async fn seed_vendor(db: &DatabaseConnection, name: &str) -> user::Model {
    seed_user(db, name, UserRole::Vendor, ApprovalStatus::Approved, true).await
}

pub async fn seed_service(db: &DatabaseConnection, name: &str) -> service::Model {
    service::ActiveModel {
        name: Set(name.to_owned()),
        description: Set(None),
        active: Set(true),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed service")
}

pub async fn seed_menu_item(db: &DatabaseConnection, name: &str, price: f64) -> menu_item::Model {
    menu_item::ActiveModel {
        name: Set(name.to_owned()),
        category: Set(None),
        price: Set(price),
        is_veg: Set(true),
        active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed menu item")
}
