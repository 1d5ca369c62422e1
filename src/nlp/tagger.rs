//! Part-of-speech tagging
//!
//! Lemmatization rules differ by part of speech, so every token is
//! assigned a coarse tag first. The default tagger combines a compact
//! built-in word table (high-frequency English plus app-review
//! vocabulary) with suffix heuristics, defaulting to noun for anything
//! unrecognized.

use rustc_hash::FxHashMap;

use crate::types::PosTag;

/// Assigns a coarse part-of-speech tag to a single token.
///
/// Implementations must be deterministic: the same word always maps to
/// the same tag. Words outside the implementation's vocabulary default
/// to [`PosTag::Noun`].
pub trait Tagger: Send + Sync {
    /// Tag one lowercase token.
    fn tag(&self, word: &str) -> PosTag;
}

// ─── Built-in word tables ────────────────────────────────────────────

/// Base-form verbs common in general English and app reviews.
pub(crate) const CORE_VERBS: &[&str] = &[
    "accept", "access", "add", "agree", "allow", "annoy", "appear", "apply", "ask", "be",
    "believe", "block", "book", "break", "bring", "browse", "build", "buy", "call", "cancel",
    "care", "carry", "catch", "charge", "check", "choose", "claim", "click", "close", "come",
    "complete", "confirm", "connect", "contact", "cost", "crash", "cut", "deal", "decide",
    "decline", "delete", "deliver", "deposit", "disagree", "disappear", "disappoint",
    "disconnect", "do", "download", "draw", "drink", "drive", "earn", "eat", "enjoy", "enter",
    "expect", "expire", "fail", "fall", "feel", "find", "fix", "fly", "force", "forget",
    "freeze", "frustrate", "get", "give", "go", "grow", "handle", "hang", "happen", "hate",
    "have", "hear", "help", "hit", "hold", "hope", "hurt", "improve", "include", "install",
    "keep", "know", "learn", "leave", "let", "like", "link", "listen", "load", "lock", "log",
    "lose", "love", "make", "manage", "mean", "meet", "miss", "need", "notify", "occur",
    "offer", "open", "order", "pay", "plan", "play", "prefer", "process", "provide", "put",
    "rate", "read", "receive", "recommend", "redeem", "refund", "register", "reinstall",
    "remember", "remind", "remove", "reply", "report", "request", "require", "reset",
    "resolve", "respond", "restart", "review", "rise", "run", "save", "say", "scan",
    "schedule", "scroll", "search", "see", "seem", "select", "sell", "send", "set", "show",
    "sign", "sit", "sleep", "solve", "speak", "spend", "stand", "start", "stop", "suggest",
    "support", "switch", "sync", "take", "talk", "tap", "teach", "tell", "think", "throw",
    "track", "transfer", "try", "turn", "type", "understand", "uninstall", "unlink", "unlock",
    "update", "upload", "use", "verify", "wait", "wake", "walk", "want", "waste", "watch",
    "win", "wish", "withdraw", "wonder", "work", "worry", "write",
];

/// Singular base-form nouns common in app reviews.
pub(crate) const CORE_NOUNS: &[&str] = &[
    "account", "address", "advertisement", "agent", "amount", "android", "answer", "app",
    "application", "atm", "balance", "bank", "battery", "bill", "booking", "branch", "browser",
    "bug", "button", "camera", "car", "card", "cart", "cash", "charge", "checkout", "cheque",
    "code", "coin", "company", "connection", "cost", "coupon", "credit", "customer", "data",
    "day", "deal", "debit", "delay", "delivery", "design", "detail", "developer", "device",
    "discount", "distance", "document", "driver", "email", "error", "evening", "experience",
    "feature", "fee", "file", "fingerprint", "flight", "food", "game", "glitch", "help",
    "history", "home", "hotel", "hour", "info", "information", "insurance", "interest",
    "interface", "internet", "invoice", "iphone", "issue", "item", "journey", "lag", "layout",
    "level", "life", "limit", "line", "link", "list", "loan", "location", "login", "map",
    "memory", "menu", "message", "minute", "money", "month", "morning", "night", "notification",
    "number", "option", "order", "otp", "page", "password", "payment", "people", "performance",
    "permission", "person", "phone", "photo", "picture", "pin", "place", "plan", "point",
    "policy", "price", "privacy", "problem", "product", "profile", "quality", "question",
    "queue", "rating", "receipt", "response", "restaurant", "result", "review", "reward",
    "ride", "room", "screen", "search", "seat", "second", "security", "service", "setting",
    "signal", "solution", "space", "speed", "star", "statement", "storage", "store",
    "subscription", "support", "tab", "taxi", "team", "thing", "ticket", "time", "total",
    "train", "transaction", "trial", "trip", "update", "user", "username", "vehicle",
    "version", "video", "way", "website", "week", "weekend", "wifi", "year",
];

/// Adjectives common in review language.
pub(crate) const CORE_ADJECTIVES: &[&str] = &[
    "actual", "amazing", "angry", "annoying", "available", "awesome", "awful", "bad", "big",
    "broken", "buggy", "busy", "certain", "cheap", "clean", "clear", "common", "compatible",
    "complete", "complicated", "confusing", "constant", "convenient", "correct", "different",
    "difficult", "disappointing", "early", "easy", "empty", "entire", "excellent", "expensive",
    "extra", "fake", "fast", "final", "free", "frequent", "friendly", "frustrating", "full",
    "glitchy", "good", "great", "happy", "hard", "helpful", "high", "horrible", "huge",
    "immediate", "important", "impossible", "incomplete", "inconvenient", "incorrect",
    "initial", "instant", "laggy", "large", "last", "late", "latest", "long", "low", "main",
    "major", "minor", "multiple", "necessary", "new", "nice", "normal", "obvious", "odd",
    "old", "outdated", "poor", "possible", "previous", "quick", "rare", "ready", "real",
    "recent", "reliable", "responsive", "right", "rude", "sad", "safe", "same", "secure",
    "several", "short", "similar", "simple", "slow", "small", "smooth", "stable", "strange",
    "sure", "terrible", "tiny", "true", "unavailable", "unhappy", "unhelpful", "unnecessary",
    "unreliable", "unresponsive", "unsafe", "unstable", "useful", "useless", "various",
    "weird", "whole", "wrong",
];

/// Adverbs common in review language.
pub(crate) const CORE_ADVERBS: &[&str] = &[
    "absolutely", "again", "almost", "already", "always", "anywhere", "apart", "away", "back",
    "badly", "barely", "completely", "constantly", "correctly", "currently", "daily",
    "definitely", "easily", "eventually", "everywhere", "extremely", "finally", "forward",
    "frequently", "hardly", "here", "immediately", "instantly", "maybe", "monthly", "nearly",
    "never", "now", "nowhere", "offline", "often", "once", "online", "perhaps", "probably",
    "properly", "quickly", "quite", "randomly", "rarely", "really", "recently", "repeatedly",
    "slowly", "so", "sometimes", "still", "there", "today", "together", "tomorrow", "too",
    "totally", "twice", "usually", "very", "weekly", "well", "yesterday", "yet",
];

/// Irregular noun plurals with their singular.
pub(crate) const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("lives", "life"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// Irregular verb forms no suffix rule reaches, with their base.
///
/// Covers the strong verbs plus consonant-doubling and `-ied`
/// inflections of the [`CORE_VERBS`] vocabulary.
pub(crate) const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"),
    ("applied", "apply"),
    ("are", "be"),
    ("ate", "eat"),
    ("been", "be"),
    ("began", "begin"),
    ("bought", "buy"),
    ("broke", "break"),
    ("broken", "break"),
    ("brought", "bring"),
    ("came", "come"),
    ("carried", "carry"),
    ("caught", "catch"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("cutting", "cut"),
    ("denied", "deny"),
    ("did", "do"),
    ("done", "do"),
    ("drawn", "draw"),
    ("drew", "draw"),
    ("driven", "drive"),
    ("dropped", "drop"),
    ("dropping", "drop"),
    ("drove", "drive"),
    ("eaten", "eat"),
    ("fallen", "fall"),
    ("fell", "fall"),
    ("felt", "feel"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("found", "find"),
    ("froze", "freeze"),
    ("frozen", "freeze"),
    ("gave", "give"),
    ("getting", "get"),
    ("given", "give"),
    ("gone", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("had", "have"),
    ("has", "have"),
    ("heard", "hear"),
    ("held", "hold"),
    ("hitting", "hit"),
    ("hung", "hang"),
    ("is", "be"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("left", "leave"),
    ("letting", "let"),
    ("logged", "log"),
    ("logging", "log"),
    ("lost", "lose"),
    ("made", "make"),
    ("meant", "mean"),
    ("met", "meet"),
    ("notified", "notify"),
    ("paid", "pay"),
    ("planned", "plan"),
    ("planning", "plan"),
    ("putting", "put"),
    ("ran", "run"),
    ("replied", "reply"),
    ("rose", "rise"),
    ("running", "run"),
    ("said", "say"),
    ("sat", "sit"),
    ("saw", "see"),
    ("seen", "see"),
    ("sent", "send"),
    ("sitting", "sit"),
    ("slept", "sleep"),
    ("sold", "sell"),
    ("spent", "spend"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("stood", "stand"),
    ("stopped", "stop"),
    ("stopping", "stop"),
    ("taken", "take"),
    ("tapped", "tap"),
    ("tapping", "tap"),
    ("taught", "teach"),
    ("thought", "think"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("told", "tell"),
    ("took", "take"),
    ("tried", "try"),
    ("understood", "understand"),
    ("verified", "verify"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("winning", "win"),
    ("woke", "wake"),
    ("won", "win"),
    ("wore", "wear"),
    ("worried", "worry"),
    ("written", "write"),
    ("wrote", "write"),
];

/// Irregular comparative and superlative adjectives.
pub(crate) const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("best", "good"),
    ("better", "good"),
    ("further", "far"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Irregular adverb comparatives.
pub(crate) const IRREGULAR_ADVERBS: &[(&str, &str)] =
    &[("best", "well"), ("better", "well"), ("farther", "far"), ("further", "far")];

/// Word-table tagger with suffix-heuristic fallback.
///
/// Exact table hits win; the table holds base forms plus the irregular
/// inflections, so "took" and "frozen" tag as verbs. For out-of-table
/// words the tagger inspects the suffix: `-ly` suggests an adverb,
/// `-ing`/`-ed` a verb, and a final `-s`/`-es` is stripped and retried
/// against the table so that plain inflections inherit the base form's
/// tag. Everything else is a noun.
///
/// The built-in table never produces [`PosTag::AdjectiveSatellite`];
/// that tag is reserved for dictionary-backed [`Tagger`] implementations
/// layered on richer lexicons.
#[derive(Debug, Clone)]
pub struct LexicalTagger {
    words: FxHashMap<&'static str, PosTag>,
}

impl Default for LexicalTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalTagger {
    /// Build the tagger from the built-in word tables.
    pub fn new() -> Self {
        let mut words = FxHashMap::default();
        for &w in CORE_NOUNS {
            words.insert(w, PosTag::Noun);
        }
        for &(form, _) in IRREGULAR_NOUNS {
            words.insert(form, PosTag::Noun);
        }
        for &w in CORE_ADVERBS {
            words.insert(w, PosTag::Adverb);
        }
        for &(form, _) in IRREGULAR_ADVERBS {
            words.insert(form, PosTag::Adverb);
        }
        // "better"/"best"/"further" read as adjectives far more often
        // than as adverbs in review text.
        for &w in CORE_ADJECTIVES {
            words.insert(w, PosTag::Adjective);
        }
        for &(form, _) in IRREGULAR_ADJECTIVES {
            words.insert(form, PosTag::Adjective);
        }
        // Verbs land last: words usable as noun or verb ("order",
        // "update", "crash") lean verb so inflections strip cleanly.
        for &w in CORE_VERBS {
            words.insert(w, PosTag::Verb);
        }
        for &(form, _) in IRREGULAR_VERBS {
            words.insert(form, PosTag::Verb);
        }
        Self { words }
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table is empty (never for the built-in tables).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn lookup(&self, word: &str) -> Option<PosTag> {
        self.words.get(word).copied()
    }
}

impl Tagger for LexicalTagger {
    fn tag(&self, word: &str) -> PosTag {
        if let Some(tag) = self.lookup(word) {
            return tag;
        }
        // Atomic multi-word replacements pass through untouched.
        if !word.chars().all(char::is_alphabetic) {
            return PosTag::Noun;
        }
        let len = word.len();
        if len > 4 && word.ends_with("ly") {
            return PosTag::Adverb;
        }
        if len > 5 && word.ends_with("ing") {
            return PosTag::Verb;
        }
        if len > 4 && word.ends_with("ed") {
            return PosTag::Verb;
        }
        if len >= 4 && word.ends_with('s') {
            if let Some(tag) = self.lookup(&word[..len - 1]) {
                return tag;
            }
            if len >= 5 && word.ends_with("es") {
                if let Some(tag) = self.lookup(&word[..len - 2]) {
                    return tag;
                }
            }
        }
        let adjectival = (len > 6
            && (word.ends_with("ous") || word.ends_with("ful") || word.ends_with("less")))
            || (len > 7 && (word.ends_with("able") || word.ends_with("ible")));
        if adjectival {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }
}
