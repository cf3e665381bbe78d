mod list;
pub use list::*;

mod keyed;
pub use keyed::*;

mod error;
pub use error::*;

mod iter;
pub use iter::{IntoIter, Iter};

mod search;
