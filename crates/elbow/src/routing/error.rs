use super::types::Axis;

#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("cannot split a connection of {count} segments to route along the {axis} axis")]
    CannotSplit { count: usize, axis: Axis },

    #[error("segment index {index} is out of range for a path of {len} segments")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown node '{name}'")]
    UnknownNode { name: String },
}

pub type Result<T> = std::result::Result<T, RoutingError>;
