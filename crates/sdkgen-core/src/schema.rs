mod model;
pub use model::Model;

mod name;
pub use name::Name;

mod property;
pub use property::{Property, PropertyTy};

mod registry;
pub use registry::Registry;

mod relation;
pub use relation::{Relation, RelationKind};
