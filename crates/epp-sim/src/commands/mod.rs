pub mod list;
pub mod pick;
