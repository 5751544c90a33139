//! Motivational quote command.

use rand::Rng;

struct Quote {
    text: &'static str,
    author: &'static str,
}

const QUOTES: &[Quote] = &[
    Quote {
        text: "Education is the most powerful weapon which you can use to change the world.",
        author: "Nelson Mandela",
    },
    Quote {
        text: "The beautiful thing about learning is that no one can take it away from you.",
        author: "B.B. King",
    },
    Quote {
        text: "The expert in anything was once a beginner.",
        author: "Helen Hayes",
    },
    Quote {
        text: "Don't let what you cannot do interfere with what you can do.",
        author: "John Wooden",
    },
    Quote {
        text: "Success is the sum of small efforts, repeated day in and day out.",
        author: "Robert Collier",
    },
    Quote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "It does not matter how slowly you go as long as you do not stop.",
        author: "Confucius",
    },
    Quote {
        text: "You are never too old to set another goal or to dream a new dream.",
        author: "C.S. Lewis",
    },
    Quote {
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
    },
];

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let quote = &QUOTES[rand::thread_rng().gen_range(0..QUOTES.len())];
    println!("{}", quote.text);
    println!("- {}", quote.author);
    Ok(())
}
