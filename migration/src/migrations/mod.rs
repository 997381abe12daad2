pub mod m202608150001_create_users;
pub mod m202608150002_create_chef_profiles;
pub mod m202608150003_create_vendor_profiles;
pub mod m202608150004_create_events;
pub mod m202608150005_create_services;
pub mod m202608150006_create_service_items;
pub mod m202608150007_create_menu_items;
pub mod m202608150008_create_bookings;
pub mod m202608150009_create_booking_menu_items;
pub mod m202608150010_create_party_responses;
pub mod m202608150011_create_orders;
pub mod m202608150012_create_payment_history;
pub mod m202608150013_create_reviews;
pub mod m202608150014_create_menu_categories;
pub mod m202608150015_create_menu_subcategories;
