#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid type of inserted '_id'")]
    InvalidInsertedId,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
