/// Sentinel returned by all search operations that find no match.
///
/// It is the maximum representable offset, so it can never collide with a
/// real position. It doubles as the "until the end" count for
/// [`crate::view::StrView::substr`] and as the default start position for
/// backward searches.
pub const NPOS: usize = usize::MAX;

/// seed of the content hash fold
pub const HASH_SEED: u64 = 0;

/// multiplier of the content hash fold
pub const HASH_MULTIPLIER: u64 = 131;
