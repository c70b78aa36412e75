use derive_more::Display;
use rand::Rng;

/// Symbols a label is built from.
pub const LABEL_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz_";
pub const MIN_LABEL_LEN: usize = 5;
pub const MAX_LABEL_LEN: usize = 9;

/// A randomly generated branch target name.
///
/// Labels are not deduplicated; two labels in the same corpus may collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display)]
pub struct Label(String);

impl Label {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let len = rng.gen_range(MIN_LABEL_LEN..=MAX_LABEL_LEN);
        let name = (0..len)
            .map(|_| LABEL_ALPHABET[rng.gen_range(0..LABEL_ALPHABET.len())] as char)
            .collect();
        Label(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `text` could have been produced by [`Label::random`].
    pub fn is_well_formed(text: &str) -> bool {
        (MIN_LABEL_LEN..=MAX_LABEL_LEN).contains(&text.len())
            && text.bytes().all(|b| LABEL_ALPHABET.contains(&b))
    }
}
