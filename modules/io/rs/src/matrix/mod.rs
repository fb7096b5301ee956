mod reader;
mod registry;
mod table;

pub use reader::Reader;
pub use registry::Registry;
pub use table::Table;
