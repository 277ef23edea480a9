pub mod disk;

pub use disk::Disk;
pub use disk::publish;
