//! Stock record types for the platform's admin pages
//!
//! Each entity is built with [`impl_record!`](crate::impl_record) and adds
//! its own [`CatalogRecord`](crate::core::record::CatalogRecord) field
//! registry plus a `draft_schema()` describing its create/edit form.

pub mod macros;

pub mod activity;
pub mod post;
pub mod subscription;
pub mod template;
pub mod tool;
pub mod user;

pub use activity::ActivityEntry;
pub use post::Post;
pub use subscription::Subscription;
pub use template::Template;
pub use tool::Tool;
pub use user::User;
