// Adapters layer: concrete implementations of the domain ports for
// external artifacts (the serialized regression model).

pub mod linear;
