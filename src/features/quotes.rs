//! Motivational quotes shown beside the timer.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// A quote and who said it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}

pub const QUOTES: [Quote; 8] = [
    Quote {
        text: "The secret of getting ahead is getting started.",
        author: "Mark Twain",
    },
    Quote {
        text: "Don't watch the clock; do what it does. Keep going.",
        author: "Sam Levenson",
    },
    Quote {
        text: "Focus on being productive instead of busy.",
        author: "Tim Ferriss",
    },
    Quote {
        text: "The way to get started is to quit talking and begin doing.",
        author: "Walt Disney",
    },
    Quote {
        text: "Success is the sum of small efforts repeated day in and day out.",
        author: "Robert Collier",
    },
    Quote {
        text: "You don't have to be great to start, but you have to start to be great.",
        author: "Zig Ziglar",
    },
    Quote {
        text: "The expert in anything was once a beginner.",
        author: "Helen Hayes",
    },
    Quote {
        text: "Education is not preparation for life; education is life itself.",
        author: "John Dewey",
    },
];

/// Pick a quote using the given random source.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> Quote {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_quote_is_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let q = random_quote(&mut rng);
            assert!(QUOTES.contains(&q));
        }
    }

    #[test]
    fn test_same_seed_same_quote() {
        let a = random_quote(&mut StdRng::seed_from_u64(42));
        let b = random_quote(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            QUOTES[6].to_string(),
            "\"The expert in anything was once a beginner.\" - Helen Hayes"
        );
    }
}
