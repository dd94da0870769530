pub mod collection;
pub mod error;
pub mod list;
pub mod util;

pub use collection::Collection;
pub use error::{CollectionError, Result};
pub use list::SharedList;
