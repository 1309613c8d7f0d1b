//! Built-in SVGL tool implementations.

mod all_svgs;
mod categories;
mod category;
mod search;
mod svg_code;

pub use all_svgs::GetAllSvgs;
pub use categories::GetCategories;
pub use category::GetSvgsByCategory;
pub use search::SearchSvgs;
pub use svg_code::GetSvgCode;
