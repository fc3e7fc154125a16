/// Keyword tables scanned against a business description, matched case-insensitively as
/// substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreeningKeywords {
    pub red_flags: &'static [&'static str],
    pub positive_signals: &'static [&'static str],
}

impl ScreeningKeywords {
    pub const STANDARD: ScreeningKeywords = ScreeningKeywords {
        red_flags: &[
            "dropship",
            "drop-ship",
            "drop ship",
            "resell",
            "re-sell",
            "wholesale only",
            "bulk only",
            "white label",
            "private label",
            "alibaba",
            "aliexpress",
        ],
        positive_signals: &[
            "handmade",
            "hand-made",
            "certified",
            "sustainable",
            "eco-friendly",
            "eco friendly",
            "recycled",
            "upcycled",
            "fair trade",
            "b-corp",
            "carbon neutral",
            "zero waste",
        ],
    };

    /// Red-flag terms found in `text`, in table order.
    pub fn red_flags_in(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.red_flags
            .iter()
            .filter(|term| haystack.contains(*term))
            .map(|term| term.to_string())
            .collect()
    }

    pub fn passes_red_flag_check(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        !self.red_flags.iter().any(|term| haystack.contains(term))
    }

    pub fn has_positive_signal(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.positive_signals
            .iter()
            .any(|term| haystack.contains(term))
    }
}

impl Default for ScreeningKeywords {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub fn passes_red_flag_check(text: &str) -> bool {
    ScreeningKeywords::STANDARD.passes_red_flag_check(text)
}

pub fn get_red_flags(text: &str) -> Vec<String> {
    ScreeningKeywords::STANDARD.red_flags_in(text)
}

pub fn has_positive_signals(text: &str) -> bool {
    ScreeningKeywords::STANDARD.has_positive_signal(text)
}
