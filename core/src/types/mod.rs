pub(crate) mod category;
pub use category::{Category, CategoryId, CategoryRef};

pub(crate) mod post;
pub use post::{Post, Rendered};

pub(crate) mod price;
pub use price::Price;

pub(crate) mod product;
pub use product::{Product, ProductId, ProductImage, ProductSummary};

pub(crate) mod slug;
pub use slug::{MAX_SLUG_LENGTH, Slug, SlugError};
