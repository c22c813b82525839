use numwords_core::numbers::{digit_count, scale_factor_for};
use numwords_core::{
    convert_number_names, Config, ConversionError, NumberConverter, NumberFormat, SAMPLE_EXPECTED,
    SAMPLE_TEXT,
};
use proptest::prelude::*;

#[test]
fn test_sample_sentence() {
    assert_eq!(convert_number_names(SAMPLE_TEXT), SAMPLE_EXPECTED);
}

#[test]
fn test_scale_composition() {
    assert_eq!(convert_number_names("two thousand seventeen"), "2017");
    assert_eq!(
        convert_number_names("five hundred twelve million one hundred thousand"),
        "512100000"
    );
    assert_eq!(convert_number_names("one hundred"), "100");
    assert_eq!(convert_number_names("nineteen"), "19");
}

#[test]
fn test_hyphenated_words() {
    assert_eq!(
        convert_number_names("twenty-two"),
        convert_number_names("twenty two")
    );
    assert_eq!(convert_number_names("ninety-nine bottles"), "99 bottles");
}

#[test]
fn test_thirteen_digits_unsupported() {
    let value = 9_000_000_000_000;
    assert_eq!(digit_count(value), 13);
    assert_eq!(scale_factor_for(value), None);

    let err = NumberConverter::default()
        .try_convert("one trillion nine trillion")
        .unwrap_err();
    assert_eq!(err, ConversionError::UnsupportedMagnitude { value });
}

#[test]
fn test_fail_soft_is_whole_text() {
    let text = "Page forty-two says two trillion five trillion dollars.";
    assert_eq!(convert_number_names(text), text);
}

#[test]
fn test_converted_sample_is_stable() {
    assert_eq!(convert_number_names(SAMPLE_EXPECTED), SAMPLE_EXPECTED);
}

#[test]
fn test_grouped_sample() {
    let config = Config {
        number_format: NumberFormat::Grouped,
        ..Config::default()
    };
    assert_eq!(
        NumberConverter::new(&config).convert(SAMPLE_TEXT),
        "As per a June 2,017 census by the National Dairy Development Board, there are approximately 512,100,000 bovines in India."
    );
}

#[test]
fn test_converter_shared_across_threads() {
    let converter = std::sync::Arc::new(NumberConverter::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let converter = converter.clone();
            std::thread::spawn(move || converter.convert(SAMPLE_TEXT))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), SAMPLE_EXPECTED);
    }
}

proptest! {
    /// Words made of letters outside the numeral tables pass through as-is.
    #[test]
    fn plain_text_is_identity(words in prop::collection::vec("[b-df-hj-np-tv-z]{1,8}", 1..12)) {
        let text = words.join(" ");
        prop_assert_eq!(convert_number_names(&text), text);
    }

    #[test]
    fn small_values_round_trip(value in 0u64..1000) {
        let text = format!("got {} items", value);
        prop_assert_eq!(convert_number_names(&text), text);
    }

    #[test]
    fn conversion_is_idempotent(
        words in prop::collection::vec(
            prop::sample::select(vec![
                "one", "two", "twelve", "nineteen", "twenty", "forty", "ninety",
                "hundred", "thousand", "million", "billion",
                "apples", "and", "census,", "the", "Board.",
            ]),
            1..12,
        )
    ) {
        let once = convert_number_names(&words.join(" "));
        let twice = convert_number_names(&once);
        prop_assert_eq!(twice, once);
    }
}
