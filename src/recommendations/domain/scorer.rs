use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult, RecommendationKind};

const AUTHOR_BOOST_CAP: usize = 6;
const TOKEN_BOOST_CAP: usize = 3;
const MIN_TOKEN_LEN: usize = 3;

// Scorer ranks candidates against the books a patron borrowed, one entry per loan.
pub trait Scorer: Sync + Send {
    fn rank(&self, history: &[BookDto], candidates: Vec<BookDto>, limit: usize) -> Vec<BookDto>;
}

/// Splits a title into lowercase runs of ASCII letters and digits, keeping runs of
/// at least three characters. Repeated words are kept.
pub fn title_tokens(title: &str) -> Vec<String> {
    title.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(|t| t.to_string())
        .collect()
}

fn author_key(author: &str) -> String {
    author.trim().to_lowercase()
}

// Profile holds the author and title-token frequencies of a borrowing history.
#[derive(Debug, Default)]
pub struct Profile {
    authors: HashMap<String, usize>,
    tokens: HashMap<String, usize>,
}

impl Profile {
    pub fn from_history(history: &[BookDto]) -> Self {
        let mut profile = Profile::default();
        for book in history {
            let author = author_key(book.author.as_str());
            if !author.is_empty() {
                *profile.authors.entry(author).or_insert(0) += 1;
            }
            for token in title_tokens(book.title.as_str()) {
                *profile.tokens.entry(token).or_insert(0) += 1;
            }
        }
        profile
    }

    pub fn score(&self, book: &BookDto) -> usize {
        let author = author_key(book.author.as_str());
        let author_boost = match self.authors.get(&author) {
            Some(count) if !author.is_empty() => (count * 2).min(AUTHOR_BOOST_CAP),
            _ => 0,
        };
        let token_boost: usize = title_tokens(book.title.as_str()).iter()
            .filter_map(|t| self.tokens.get(t))
            .map(|count| (*count).min(TOKEN_BOOST_CAP))
            .sum();
        author_boost + token_boost
    }
}

// Ranked orders by score, then by title and isbn reversed so that "greater" is always
// the better recommendation.
#[derive(Debug)]
struct Ranked {
    score: usize,
    title_key: String,
    book: BookDto,
}

impl Ranked {
    // lowercase comparison, which matches case-insensitive ordering for ASCII titles
    fn new(score: usize, book: BookDto) -> Self {
        Self { score, title_key: book.title.to_lowercase(), book }
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
            .then_with(|| other.title_key.cmp(&self.title_key))
            .then_with(|| other.book.isbn.cmp(&self.book.isbn))
    }
}

/// HistoryScorer boosts candidates sharing authors or title words with the history.
///
/// A candidate scores `min(6, 2 * author count) + sum(min(3, token count))` over the
/// tokens of its title. Zero scores are dropped. The best `limit` candidates are kept
/// in a bounded min-heap whose top is always the weakest entry, so every eviction
/// removes the lowest score and, among equal scores, the alphabetically last title.
pub struct HistoryScorer {}

impl Scorer for HistoryScorer {
    fn rank(&self, history: &[BookDto], candidates: Vec<BookDto>, limit: usize) -> Vec<BookDto> {
        if limit == 0 {
            return vec![];
        }
        let profile = Profile::from_history(history);
        let mut top: BinaryHeap<Reverse<Ranked>> = BinaryHeap::with_capacity(limit.min(candidates.len()) + 1);
        for candidate in candidates {
            let score = profile.score(&candidate);
            if score == 0 {
                continue;
            }
            top.push(Reverse(Ranked::new(score, candidate)));
            if top.len() > limit {
                top.pop();
            }
        }
        // ascending Reverse order is descending rank
        top.into_sorted_vec().into_iter().map(|Reverse(r)| r.book).collect()
    }
}

// ScorerRegistry maps every RecommendationKind to its scorer.
pub struct ScorerRegistry {
    scorers: HashMap<RecommendationKind, Box<dyn Scorer>>,
}

impl ScorerRegistry {
    pub fn new() -> Self {
        let mut scorers: HashMap<RecommendationKind, Box<dyn Scorer>> = HashMap::new();
        scorers.insert(RecommendationKind::History, Box::new(HistoryScorer {}));
        Self { scorers }
    }

    pub fn scorer_for(&self, kind: RecommendationKind) -> LibraryResult<&dyn Scorer> {
        self.scorers.get(&kind).map(|s| s.as_ref()).ok_or_else(|| LibraryError::validation(
            format!("no scorer registered for {}", kind).as_str(), Some("kind".to_string())))
    }
}

impl Default for ScorerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
