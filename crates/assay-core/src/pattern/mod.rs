pub mod base;
pub mod feasibility;
pub mod keywords;
mod lenient;
pub mod normalized;

pub use base::Pattern;
pub use feasibility::Feasibility;
pub use keywords::extract_business_keywords;
pub use normalized::NormalizedPattern;
