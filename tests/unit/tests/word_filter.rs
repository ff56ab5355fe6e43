use wordkey_core::FilterOptions;
use wordkey_wordlist::WordFilter;

#[test]
fn word_filter_defaults() {
    let filter = WordFilter::default();
    assert!(filter.is_valid("correct"));
    assert!(!filter.is_valid(""));
    // Default exclusion set rejects apostrophes.
    assert!(!filter.is_valid("horse's"));
}

#[test]
fn word_filter_exclusion() {
    let options = FilterOptions {
        exclude_chars: ['\''].into_iter().collect(),
        enable_exclusion: true,
        ..Default::default()
    };
    let filter = WordFilter::new(&options);
    assert!(!filter.is_valid("ab'c"));
    assert!(filter.is_valid("abc"));

    let options = FilterOptions {
        enable_exclusion: false,
        ..options
    };
    let filter = WordFilter::new(&options);
    assert!(filter.is_valid("ab'c"));
}

#[test]
fn word_filter_length_bound() {
    let options = FilterOptions {
        max_word_length: 5,
        ..Default::default()
    };
    let filter = WordFilter::new(&options);
    assert!(!filter.is_valid("toolongword"));
    assert!(filter.is_valid("toads"));
    assert!(filter.is_valid("a"));
    assert!(!filter.is_valid(""));
}

#[test]
fn word_filter_multibyte_length() {
    let options = FilterOptions {
        max_word_length: 4,
        ..Default::default()
    };
    let filter = WordFilter::new(&options);
    // Length is counted in characters, not bytes.
    assert!(filter.is_valid("über"));
}
