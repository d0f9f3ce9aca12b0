use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("wishlist error: {0}")]
    Wishlist(#[from] WishlistError),
}

#[derive(Error, Debug)]
pub enum WishlistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt wishlist data: {0}")]
    Corrupt(#[from] serde_json::Error),
}
