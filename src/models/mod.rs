pub mod status;
pub mod work_item;

pub use status::Status;
pub use work_item::WorkItem;
