pub mod feasibility;
pub mod jaccard;

pub use feasibility::feasibility_alignment;
pub use jaccard::jaccard;
