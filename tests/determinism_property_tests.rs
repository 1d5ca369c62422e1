use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use review_prep::nlp::stopwords::StopwordFilter;
use review_prep::nlp::tokenizer::{normalize_symbols, tokenize};
use review_prep::{
    EligibilityConfig, EligibilityFilter, EntityCounts, Lexicon, LexiconDefinitions, Resolver,
    ReviewRecord,
};

proptest! {
    // Restricted to ASCII: a handful of Unicode lowercasings (e.g. İ)
    // emit combining marks that the alphabetic filter would then drop.
    // Stopword passes sit outside this property on purpose: re-running
    // the full pipeline on a joined document may remove further tokens
    // (a lemma can itself be a stopword), so only the tokenizer layer
    // is required to be idempotent.
    #[test]
    fn tokenize_after_normalize_is_idempotent(s in "[a-zA-Z0-9$.!,' ]{0,200}") {
        let tokens = tokenize(&normalize_symbols(&s));
        let rejoined = tokens.join(" ");
        let again = tokenize(&normalize_symbols(&rejoined));
        prop_assert_eq!(tokens, again);
    }

    #[test]
    fn tokens_are_lowercase_alphabetic(s in "[ -~]{0,200}") {
        for token in tokenize(&normalize_symbols(&s)) {
            prop_assert!(!token.is_empty());
            prop_assert!(
                token.chars().all(|c| c.is_ascii_lowercase()),
                "unexpected token {:?}", token
            );
        }
    }

    #[test]
    fn stopword_filter_keeps_an_ordered_subsequence(
        tokens in prop::collection::vec("[a-z]{1,8}", 0..32)
    ) {
        let filter = StopwordFilter::from_list(&["the", "a", "to", "is"]);
        let kept = filter.filter_owned(tokens.clone());

        for word in &kept {
            prop_assert!(!filter.is_stopword(word), "stopword {:?} survived", word);
        }

        let mut survivors = kept.iter();
        let mut expected = survivors.next();
        for word in &tokens {
            if expected == Some(word) {
                expected = survivors.next();
            }
        }
        prop_assert!(expected.is_none(), "filter reordered surviving tokens");
    }

    #[test]
    fn resolver_is_deterministic(word in "[a-z]{1,12}") {
        let definitions = LexiconDefinitions::parse("hrs hours\nbtw by the way\n");
        let lexicon = Lexicon::from_definitions(None, Some(&definitions), &[], &[]);
        let resolver = Resolver::new();

        let first = resolver.resolve(&word, &lexicon);
        let second = resolver.resolve(&word, &lexicon);
        prop_assert_eq!(&first, &second);
        prop_assert!(
            first.chars().all(|c| c.is_ascii_lowercase() || c == ' '),
            "unexpected characters in {:?}", first
        );
    }

    #[test]
    fn eligibility_matches_the_four_way_conjunction(
        app_idx in 0usize..3,
        score in 0u8..=5,
        day_offset in 0u64..420,
        with_marker in any::<bool>(),
    ) {
        let apps = ["foodpanda", "grab", "shopee"];
        let seed_date = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let mut collection = Vec::new();
        for (app, reviews) in [("foodpanda", 3), ("grab", 2), ("shopee", 1)] {
            for _ in 0..reviews {
                collection.push(ReviewRecord::new(app, "seed", 3, seed_date));
            }
        }
        let counts = EntityCounts::tally(&collection);
        let config = EligibilityConfig {
            min_entity_reviews: 2,
            ..EligibilityConfig::default()
        };
        let filter = EligibilityFilter::new(&config, &counts).unwrap();

        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap() + Days::new(day_offset);
        let content = if with_marker {
            "crashes every time i pay"
        } else {
            "nice interface, smooth checkout"
        };
        let record = ReviewRecord::new(apps[app_idx], content, score, date);

        let expected = with_marker
            && score <= config.max_score
            && date <= config.cutoff_date
            && counts.count(apps[app_idx]) > config.min_entity_reviews;
        prop_assert_eq!(filter.is_eligible(&record), expected);
    }
}
