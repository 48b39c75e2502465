use crate::error::FloatStegError;

pub type Result<T> = std::result::Result<T, FloatStegError>;
