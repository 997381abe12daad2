pub mod booking;
pub mod booking_menu_item;
pub mod chef_profile;
pub mod event;
pub mod menu_category;
pub mod menu_category_link;
pub mod menu_item;
pub mod menu_subcategory;
pub mod order;
pub mod party_response;
pub mod payment;
pub mod review;
pub mod service;
pub mod service_item;
pub mod user;
pub mod vendor_profile;

pub use booking::Entity as Booking;
pub use booking_menu_item::Entity as BookingMenuItem;
pub use chef_profile::Entity as ChefProfile;
pub use event::Entity as Event;
pub use menu_category::Entity as MenuCategory;
pub use menu_category_link::Entity as MenuCategoryLink;
pub use menu_item::Entity as MenuItem;
pub use menu_subcategory::Entity as MenuSubcategory;
pub use order::Entity as Order;
pub use party_response::Entity as PartyResponse;
pub use payment::Entity as Payment;
pub use review::Entity as Review;
pub use service::Entity as Service;
pub use service_item::Entity as ServiceItem;
pub use user::Entity as User;
pub use vendor_profile::Entity as VendorProfile;
