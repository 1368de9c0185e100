pub mod repository;
pub mod service;
pub mod view;

pub use repository::{PartitionRepository, SeaOrmPartitionRepository};
pub use service::PartitionService;
pub use view::PartitionView;
