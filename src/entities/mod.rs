//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod item;
pub mod list_entry;
pub mod monthly_entry;
pub mod monthly_list;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use item::{Column as ItemColumn, Entity as Item, Model as ItemModel};
pub use list_entry::{Column as ListEntryColumn, Entity as ListEntry, Model as ListEntryModel};
pub use monthly_entry::{
    Column as MonthlyEntryColumn, Entity as MonthlyEntry, Model as MonthlyEntryModel,
};
pub use monthly_list::{
    Column as MonthlyListColumn, Entity as MonthlyList, Model as MonthlyListModel,
};
