use crate::constants::{HASH_MULTIPLIER, HASH_SEED};
use crate::view::StrView;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::io::{self, Write};

impl<'a> StrView<'a> {
    /// Write exactly the viewed bytes to `out`, nothing appended.
    ///
    /// An empty view writes zero bytes and performs no read of the storage.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        out.write_all(self.as_bytes())
    }

    /// owned copy of the viewed bytes, independent of the view afterwards
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Content hash: every byte, taken as an unsigned 0-255 value, is folded
    /// into a running accumulator, `h = h * 131 + byte`, seeded with 0.
    ///
    /// Views with equal content hash equal no matter how they were
    /// constructed. The multiply wraps on overflow.
    pub fn hash_value(&self) -> u64 {
        let mut h = HASH_SEED;
        for &b in self.as_bytes() {
            h = h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(b));
        }
        h
    }
}

impl<'a> Display for StrView<'a> {
    /// Textual rendering for logs and CLI output. Exact for UTF-8 content,
    /// lossy otherwise; use [`StrView::write_to`] for byte-exact output.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<'a> Debug for StrView<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "StrView({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl<'a> Hash for StrView<'a> {
    /// hashes the viewed content, so equal views hash equal as map keys
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}
