use rand::RngCore;
use sha2::{Digest, Sha256};

/// Permission bitfield: bit 0 grants administrator rights.
pub const ADMINISTRATOR: i32 = 1;

pub fn is_admin(permissions: i32) -> bool {
    permissions & ADMINISTRATOR != 0
}

const ZWS_TABLE: [char; 4] = ['\u{200b}', '\u{200c}', '\u{200d}', '\u{2060}'];

const EMOJI_TABLE: [char; 16] = [
    '😀', '😁', '😂', '🤣', '😄', '😅', '😆', '😉', '😊', '😋', '😎', '😍', '😘', '🥰', '😗', '🙃',
];

/// Default slug generator: hash fresh random bytes and base58-encode,
/// truncated to `length` characters. One hash yields ~44 characters, so
/// longer slugs concatenate further hashes until `length` is reached.
pub fn generate(length: usize) -> String {
    let mut encoded = String::new();
    while encoded.len() < length {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        let hash = Sha256::digest(seed);
        encoded.push_str(&bs58::encode(hash).into_string());
    }
    encoded.truncate(length);
    encoded
}

/// Zero-width slug: `length` invisible characters.
pub fn zws(length: usize) -> String {
    random_chars(&ZWS_TABLE, length)
}

/// Emoji slug: `length` emoji characters.
pub fn emoji(length: usize) -> String {
    random_chars(&EMOJI_TABLE, length)
}

fn random_chars(table: &[char], length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| table[rng.next_u32() as usize % table.len()])
        .collect()
}

/// Picks the slug style from the `generator` request header. Unknown values
/// fall back to the default generator.
pub fn slug_for(generator: Option<&str>, length: usize) -> String {
    match generator {
        Some("zws") => zws(length),
        Some("emoji") => emoji(length),
        _ => generate(length),
    }
}

/// Extension is everything after the last dot; a dot-less filename is
/// treated as its own extension.
pub fn file_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => name,
    }
}

/// Blacklist matches are exact, no case folding.
pub fn is_blacklisted(blacklist: &[String], ext: &str) -> bool {
    blacklist.iter().any(|entry| entry == ext)
}

/// Route segments that slugs must never shadow.
const RESERVED_SLUGS: [&str; 2] = ["api", "raw"];

/// Vanity codes must stay a single path segment and keep clear of the
/// reserved routes.
pub fn valid_vanity(vanity: &str) -> bool {
    !vanity.is_empty() && !vanity.contains('/') && !RESERVED_SLUGS.contains(&vanity)
}

pub fn valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_bit() {
        assert!(!is_admin(0));
        assert!(is_admin(ADMINISTRATOR));
        assert!(is_admin(ADMINISTRATOR | 4));
        assert!(!is_admin(2));
    }

    #[test]
    fn generate_respects_length_and_alphabet() {
        for length in [1, 6, 15, 32] {
            let slug = generate(length);
            assert_eq!(slug.len(), length);
            assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
            // base58 excludes the ambiguous characters
            assert!(!slug.contains(['0', 'O', 'I', 'l']));
        }
    }

    #[test]
    fn generate_fills_lengths_beyond_one_hash() {
        // a single base58-encoded sha256 is ~44 characters
        for length in [44, 64, 100] {
            let slug = generate(length);
            assert_eq!(slug.len(), length);
            assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn generate_is_random() {
        assert_ne!(generate(16), generate(16));
    }

    #[test]
    fn zws_produces_invisible_chars() {
        let slug = zws(8);
        assert_eq!(slug.chars().count(), 8);
        assert!(slug.chars().all(|c| ZWS_TABLE.contains(&c)));
    }

    #[test]
    fn emoji_draws_from_table() {
        let slug = emoji(5);
        assert_eq!(slug.chars().count(), 5);
        assert!(slug.chars().all(|c| EMOJI_TABLE.contains(&c)));
    }

    #[test]
    fn slug_for_dispatches_on_header() {
        let slug = slug_for(Some("zws"), 4);
        assert!(slug.chars().all(|c| ZWS_TABLE.contains(&c)));
        let slug = slug_for(Some("emoji"), 4);
        assert!(slug.chars().all(|c| EMOJI_TABLE.contains(&c)));
        let slug = slug_for(Some("bogus"), 4);
        assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
        let slug = slug_for(None, 4);
        assert_eq!(slug.len(), 4);
    }

    #[test]
    fn extension_after_last_dot() {
        assert_eq!(file_extension("photo.png"), "png");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("Makefile"), "Makefile");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn blacklist_matches_exactly() {
        let blacklist = vec!["exe".to_string(), "bat".to_string()];
        assert!(is_blacklisted(&blacklist, "exe"));
        assert!(is_blacklisted(&blacklist, "bat"));
        // no case folding
        assert!(!is_blacklisted(&blacklist, "EXE"));
        assert!(!is_blacklisted(&blacklist, "png"));
        assert!(!is_blacklisted(&[], "exe"));
    }

    #[test]
    fn vanity_rejects_multi_segment_and_reserved_codes() {
        assert!(valid_vanity("my-link"));
        assert!(valid_vanity("raw2"));
        assert!(!valid_vanity(""));
        assert!(!valid_vanity("a/b"));
        assert!(!valid_vanity("api"));
        assert!(!valid_vanity("raw"));
    }

    #[test]
    fn url_validation() {
        assert!(valid_url("https://example.com/page?q=1"));
        assert!(!valid_url("not a url"));
    }
}
