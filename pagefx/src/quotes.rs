#[cfg(test)]
#[path = "quotes_test.rs"]
mod quotes_test;

/// One quotation shown in the "food for thought" box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    /// Quote text wrapped in quotation marks, as rendered on the page.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("\"{}\"", self.text)
    }
}

/// The fixed rotation list. Order is irrelevant; selection is uniform.
pub const QUOTES: [Quote; 7] = [
    Quote {
        text: "Hope is the thing with feathers that perches in the soul.",
        author: "Emily Dickinson",
    },
    Quote {
        text: "Freedom lies in being bold.",
        author: "Robert Frost",
    },
    Quote {
        text: "Mother Nature never breaks her own laws.",
        author: "Leonardo da Vinci",
    },
    Quote {
        text: "Photography is the story I fail to put into words.",
        author: "Destin Sparks",
    },
    Quote {
        text: "The mountains are calling and I must go.",
        author: "John Muir",
    },
    Quote {
        text: "What we see depends mainly on what we look for.",
        author: "John Lubbock",
    },
    Quote {
        text: "Art is freedom. Being able to bend things most see as a straight line.",
        author: "Unknown",
    },
];

/// Pick a quote from a uniform `[0, 1)` random sample.
///
/// Memoryless by design: consecutive ticks may repeat a quote. A sample
/// at or above 1.0 clamps to the last entry rather than indexing out of
/// bounds.
#[must_use]
pub fn pick(sample: f64) -> &'static Quote {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = ((sample * QUOTES.len() as f64).floor() as usize).min(QUOTES.len() - 1);
    &QUOTES[index]
}
