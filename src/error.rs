use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("divide by zero")]
    DivideByZero,
    #[error("{0}")]
    Io(#[from] io::Error),
}
