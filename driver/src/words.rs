use minheap::defaults::SAMPLE_WORDS;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Read};

pub fn sample_words() -> Vec<String> {
    SAMPLE_WORDS.iter().map(|w| w.to_string()).collect()
}

// Whitespace-separated words; blank input yields no words.
pub fn read_words<R: Read>(mut input: R) -> io::Result<Vec<String>> {
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    Ok(buf.split_whitespace().map(String::from).collect())
}

/// `count` lowercase ASCII words of `len` letters. Without a seed the words
/// differ on every run.
pub fn random_words(count: usize, len: usize, seed: Option<u64>) -> Vec<String> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_words() {
        let input = "pear  apple\norange\t kiwi\n";
        let words = read_words(input.as_bytes()).unwrap();
        assert_eq!(words, vec!["pear", "apple", "orange", "kiwi"]);
        assert!(read_words("  \n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_random_words_shape() {
        let words = random_words(20, 6, Some(7));
        assert_eq!(words.len(), 20);
        for w in &words {
            assert_eq!(w.len(), 6);
            assert!(w.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_random_words_seeded() {
        assert_eq!(random_words(5, 3, Some(99)), random_words(5, 3, Some(99)));
        assert!(random_words(0, 3, None).is_empty());
    }

    #[test]
    fn test_sample_words() {
        let words = sample_words();
        assert_eq!(words.len(), 7);
        assert_eq!(words[0], "pear");
    }
}
