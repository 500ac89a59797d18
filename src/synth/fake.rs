//! Readable fake-text primitives.
//!
//! Stand-in for a full fake-data library: a small lexicon plus sentence
//! assembly, generic over the RNG so callers stay deterministic under a fixed
//! seed. Any realistic-looking text source is substitutable here.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Lexicon for words, map keys, and filler sentences. ASCII only, so byte
/// and char lengths agree everywhere below.
const WORDS: &[&str] = &[
    "able", "account", "action", "air", "amount", "animal", "answer", "area",
    "autumn", "bank", "base", "bird", "blue", "board", "body", "book",
    "bridge", "bright", "brown", "calm", "card", "care", "change", "charge",
    "chart", "check", "child", "city", "class", "clear", "cloud", "coast",
    "cold", "color", "common", "corner", "count", "course", "cover", "craft",
    "dance", "dark", "deal", "deep", "desk", "detail", "dream", "drive",
    "early", "earth", "east", "edge", "effect", "energy", "event", "extra",
    "fact", "fair", "farm", "fast", "field", "figure", "final", "fire",
    "floor", "force", "forest", "form", "frame", "fresh", "front", "garden",
    "glass", "gold", "grand", "grass", "green", "group", "guide", "happy",
    "heart", "heavy", "hill", "home", "hour", "house", "idea", "image",
    "iron", "island", "issue", "item", "lake", "land", "large", "level",
    "light", "line", "local", "long", "major", "march", "mark", "metal",
    "mind", "model", "moment", "motion", "music", "night", "north", "note",
    "ocean", "offer", "order", "paper", "park", "past", "path", "peace",
    "phase", "piece", "place", "plain", "plan", "plant", "point", "power",
    "press", "prime", "quick", "quiet", "rain", "range", "rapid", "reach",
    "record", "region", "report", "result", "rich", "ridge", "river", "road",
    "rock", "room", "round", "route", "scale", "scene", "school", "score",
    "sense", "shape", "share", "sharp", "shore", "sight", "sign", "silver",
    "simple", "small", "smooth", "solid", "sound", "south", "space", "spring",
    "square", "stage", "star", "state", "steel", "stone", "store", "storm",
    "story", "stream", "street", "strong", "study", "style", "summer", "table",
    "team", "term", "theme", "thing", "tide", "time", "tone", "touch",
    "tower", "track", "trade", "train", "tree", "trip", "unit", "valley",
    "value", "view", "water", "wave", "west", "wheel", "white", "wide",
    "wind", "window", "winter", "wood", "word", "world", "yard", "year",
];

/// One random word from the lexicon.
pub fn word<R: Rng>(rng: &mut R) -> String {
    WORDS[rng.gen_range(0..WORDS.len())].to_string()
}

/// A short sentence: `nb_words` words, capitalized, trailing period.
pub fn sentence<R: Rng>(rng: &mut R, nb_words: usize) -> String {
    let mut out = String::new();
    for i in 0..nb_words.max(1) {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(WORDS[rng.gen_range(0..WORDS.len())]);
    }
    out.push('.');
    capitalize(out)
}

/// Exactly `len` random alphanumeric characters.
pub fn chars_exact<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Readable filler text of at most `max_chars` characters: words while they
/// fit (reserving one char for the period), then a capital and a period.
/// Falls back to plain characters when not even one word fits.
pub fn text<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    let budget = max_chars.saturating_sub(1); // room for the period
    let mut out = String::new();
    loop {
        let w = WORDS[rng.gen_range(0..WORDS.len())];
        let sep = usize::from(!out.is_empty());
        if out.len() + sep + w.len() > budget {
            break;
        }
        if sep == 1 {
            out.push(' ');
        }
        out.push_str(w);
    }
    if out.is_empty() {
        return chars_exact(rng, max_chars);
    }
    out.push('.');
    capitalize(out)
}

fn capitalize(mut s: String) -> String {
    if let Some(first) = s.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    s
}

// ------------------------------- Tests ------------------------------------ //
