use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608150001_create_users::Migration),
            Box::new(migrations::m202608150002_create_chef_profiles::Migration),
            Box::new(migrations::m202608150003_create_vendor_profiles::Migration),
            Box::new(migrations::m202608150004_create_events::Migration),
            Box::new(migrations::m202608150005_create_services::Migration),
            Box::new(migrations::m202608150006_create_service_items::Migration),
            Box::new(migrations::m202608150007_create_menu_items::Migration),
            Box::new(migrations::m202608150008_create_bookings::Migration),
            Box::new(migrations::m202608150009_create_booking_menu_items::Migration),
            Box::new(migrations::m202608150010_create_party_responses::Migration),
            Box::new(migrations::m202608150011_create_orders::Migration),
            Box::new(migrations::m202608150012_create_payment_history::Migration),
            Box::new(migrations::m202608150013_create_reviews::Migration),
            Box::new(migrations::m202608150014_create_menu_categories::Migration),
            Box::new(migrations::m202608150015_create_menu_subcategories::Migration),
        ]
    }
}
