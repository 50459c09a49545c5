//! Motivational quotes shown on the dashboard.

use rand::seq::SliceRandom;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

/// Pick a random quote.
pub fn random() -> Quote {
    let mut rng = rand::thread_rng();
    QUOTES.choose(&mut rng).copied().unwrap_or(QUOTES[0])
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
    },
    Quote {
        text: "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        author: "Winston Churchill",
    },
    Quote {
        text: "Don't watch the clock; do what it does. Keep going.",
        author: "Sam Levenson",
    },
    Quote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "Act as if what you do makes a difference. It does.",
        author: "William James",
    },
    Quote {
        text: "What lies behind us and what lies before us are tiny matters compared to what lies within us.",
        author: "Ralph Waldo Emerson",
    },
    Quote {
        text: "Your time is limited, don't waste it living someone else's life.",
        author: "Steve Jobs",
    },
    Quote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Success usually comes to those who are too busy to be looking for it.",
        author: "Henry David Thoreau",
    },
    Quote {
        text: "Hard work beats talent when talent doesn't work hard.",
        author: "Tim Notke",
    },
    Quote {
        text: "The only limit to our realization of tomorrow is our doubts of today.",
        author: "Franklin D. Roosevelt",
    },
    Quote {
        text: "Dream big and dare to fail.",
        author: "Norman Vaughan",
    },
    Quote {
        text: "It's not whether you get knocked down, it's whether you get up.",
        author: "Vince Lombardi",
    },
    Quote {
        text: "If you're going through hell, keep going.",
        author: "Winston Churchill",
    },
    Quote {
        text: "The harder you work for something, the greater you'll feel when you achieve it.",
        author: "Anonymous",
    },
    Quote {
        text: "Success is walking from failure to failure with no loss of enthusiasm.",
        author: "Winston Churchill",
    },
    Quote {
        text: "You don't have to be great to start, but you have to start to be great.",
        author: "Zig Ziglar",
    },
    Quote {
        text: "Go the extra mile. It's never crowded there.",
        author: "Dr. Wayne D. Dyer",
    },
    Quote {
        text: "Do what you can, with what you have, where you are.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "Don't stop when you're tired. Stop when you're done.",
        author: "Wesley Snipes",
    },
    Quote {
        text: "The secret of getting ahead is getting started.",
        author: "Mark Twain",
    },
    Quote {
        text: "The only way to achieve the impossible is to believe it is possible.",
        author: "Charles Kingsleigh",
    },
    Quote {
        text: "Opportunities don't happen. You create them.",
        author: "Chris Grosser",
    },
    Quote {
        text: "Don't be pushed around by the fears in your mind. Be led by the dreams in your heart.",
        author: "Roy T. Bennett",
    },
    Quote {
        text: "Setting goals is the first step in turning the invisible into the visible.",
        author: "Tony Robbins",
    },
    Quote {
        text: "Great things are done by a series of small things brought together.",
        author: "Vincent Van Gogh",
    },
    Quote {
        text: "You are never too old to set another goal or to dream a new dream.",
        author: "C.S. Lewis",
    },
    Quote {
        text: "It always seems impossible until it's done.",
        author: "Nelson Mandela",
    },
    Quote {
        text: "Keep your face always toward the sunshine—and shadows will fall behind you.",
        author: "Walt Whitman",
    },
    Quote {
        text: "The best time to plant a tree was 20 years ago. The second best time is now.",
        author: "Chinese Proverb",
    },
    Quote {
        text: "Don't wait. The time will never be just right.",
        author: "Napoleon Hill",
    },
    Quote {
        text: "Start where you are. Use what you have. Do what you can.",
        author: "Arthur Ashe",
    },
    Quote {
        text: "Happiness is not something ready made. It comes from your own actions.",
        author: "Dalai Lama",
    },
    Quote {
        text: "The journey of a thousand miles begins with one step.",
        author: "Lao Tzu",
    },
    Quote {
        text: "Don't limit your challenges. Challenge your limits.",
        author: "Jerry Dunn",
    },
    Quote {
        text: "You miss 100% of the shots you don't take.",
        author: "Wayne Gretzky",
    },
    Quote {
        text: "Perseverance is not a long race; it is many short races one after the other.",
        author: "Walter Elliot",
    },
    Quote {
        text: "Success is how high you bounce when you hit bottom.",
        author: "George S. Patton",
    },
    Quote {
        text: "Courage is resistance to fear, mastery of fear—not absence of fear.",
        author: "Mark Twain",
    },
    Quote {
        text: "What you get by achieving your goals is not as important as what you become by achieving your goals.",
        author: "Zig Ziglar",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_returns_a_known_quote() {
        let q = random();
        assert!(QUOTES.iter().any(|c| c.text == q.text));
    }
}
