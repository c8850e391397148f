//! Presentation annotator: random pastel colors for token display.
//!
//! Purely cosmetic and deliberately non-deterministic; colors are fresh on
//! every call and carry no identity across requests.

use rand::Rng;

/// Low end of each RGB channel; keeps colors pastel and readable.
const CHANNEL_FLOOR: u8 = 150;

/// Draw one random pastel color as a CSS `rgb(r, g, b)` string.
pub fn random_color() -> String {
    random_color_with(&mut rand::rng())
}

/// Like [`random_color`], with an explicit randomness source for callers that
/// need reproducibility.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let r: u8 = rng.random_range(CHANNEL_FLOOR..=u8::MAX);
    let g: u8 = rng.random_range(CHANNEL_FLOOR..=u8::MAX);
    let b: u8 = rng.random_range(CHANNEL_FLOOR..=u8::MAX);
    format!("rgb({r}, {g}, {b})")
}

/// Pair every token with an independently drawn color.
pub fn colorize(tokens: &[String]) -> Vec<(String, String)> {
    tokens
        .iter()
        .map(|token| (token.clone(), random_color()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn channels(color: &str) -> Vec<u8> {
        color
            .trim_start_matches("rgb(")
            .trim_end_matches(')')
            .split(", ")
            .map(|c| c.parse().unwrap())
            .collect()
    }

    #[test]
    fn channels_stay_in_pastel_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let color = random_color_with(&mut rng);
            let parsed = channels(&color);
            assert_eq!(parsed.len(), 3, "{color}");
            assert!(parsed.iter().all(|&c| c >= CHANNEL_FLOOR), "{color}");
        }
    }

    #[test]
    fn seeded_rng_reproduces_colors() {
        let a = random_color_with(&mut StdRng::seed_from_u64(42));
        let b = random_color_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn colorize_keeps_token_order_and_length() {
        let tokens = vec!["He".to_string(), "llo".to_string(), " ".to_string()];
        let colored = colorize(&tokens);
        assert_eq!(colored.len(), tokens.len());
        for ((text, color), token) in colored.iter().zip(&tokens) {
            assert_eq!(text, token);
            assert!(color.starts_with("rgb("));
        }
    }
}
