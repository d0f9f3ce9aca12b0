use nutype::nutype;

pub const MAX_SLUG_LENGTH: usize = 200;

/// URL slug identifying a product, category, or post.
///
/// WordPress slugs are lowercase; input is normalized so lookups never miss
/// on case alone.
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = MAX_SLUG_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Slug(String);
