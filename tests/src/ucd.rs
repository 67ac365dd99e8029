use unicode_normalization_source::{NormalizationTest, NORMALIZATION_TESTS};
use unicode_normalizing::Normalizer;

use crate::data::{hex, tables};

macro_rules! test {
    ($left: expr, $right: expr, $normalizer: expr, $test: expr, $str: literal) => {
        assert_eq!(
            $left,
            $normalizer.normalize_codes(&$right),
            $str,
            $test.part,
            $test.line,
            hex(&$right),
            $test.description
        );
    };
}

fn tests() -> &'static Vec<NormalizationTest>
{
    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;
    assert!(!tests.is_empty());

    tests
}

/// тесты NFD нормализации из UCD
#[test]
fn ucd_test_nfd()
{
    // c3 ==  toNFD(c1) ==  toNFD(c2) ==  toNFD(c3)
    // c5 ==  toNFD(c4) ==  toNFD(c5)

    let tables = tables();
    let normalizer = Normalizer::nfd(&tables);

    for t in tests() {
        test!(t.c3, t.c1, normalizer, t, "{} {}: c3 == toNFD(c1) [{}] {}");
        test!(t.c3, t.c2, normalizer, t, "{} {}: c3 == toNFD(c2) [{}] {}");
        test!(t.c3, t.c3, normalizer, t, "{} {}: c3 == toNFD(c3) [{}] {}");
        test!(t.c5, t.c4, normalizer, t, "{} {}: c5 == toNFD(c4) [{}] {}");
        test!(t.c5, t.c5, normalizer, t, "{} {}: c5 == toNFD(c5) [{}] {}");
    }
}

/// тесты NFC нормализации из UCD
#[test]
fn ucd_test_nfc()
{
    // c2 ==  toNFC(c1) ==  toNFC(c2) ==  toNFC(c3)
    // c4 ==  toNFC(c4) ==  toNFC(c5)

    let tables = tables();
    let normalizer = Normalizer::nfc(&tables);

    for t in tests() {
        test!(t.c2, t.c1, normalizer, t, "{} {}: c2 == toNFC(c1) [{}] {}");
        test!(t.c2, t.c2, normalizer, t, "{} {}: c2 == toNFC(c2) [{}] {}");
        test!(t.c2, t.c3, normalizer, t, "{} {}: c2 == toNFC(c3) [{}] {}");
        test!(t.c4, t.c4, normalizer, t, "{} {}: c4 == toNFC(c4) [{}] {}");
        test!(t.c4, t.c5, normalizer, t, "{} {}: c4 == toNFC(c5) [{}] {}");
    }
}

/// тесты NFKD нормализации из UCD
#[test]
fn ucd_test_nfkd()
{
    // c5 == toNFKD(c1) == toNFKD(c2) == toNFKD(c3) == toNFKD(c4) == toNFKD(c5)

    let tables = tables();
    let normalizer = Normalizer::nfkd(&tables);

    for t in tests() {
        test!(t.c5, t.c1, normalizer, t, "{} {}: c5 == toNFKD(c1) [{}] {}");
        test!(t.c5, t.c2, normalizer, t, "{} {}: c5 == toNFKD(c2) [{}] {}");
        test!(t.c5, t.c3, normalizer, t, "{} {}: c5 == toNFKD(c3) [{}] {}");
        test!(t.c5, t.c4, normalizer, t, "{} {}: c5 == toNFKD(c4) [{}] {}");
        test!(t.c5, t.c5, normalizer, t, "{} {}: c5 == toNFKD(c5) [{}] {}");
    }
}

/// тесты NFKC нормализации из UCD
#[test]
fn ucd_test_nfkc()
{
    // c4 == toNFKC(c1) == toNFKC(c2) == toNFKC(c3) == toNFKC(c4) == toNFKC(c5)

    let tables = tables();
    let normalizer = Normalizer::nfkc(&tables);

    for t in tests() {
        test!(t.c4, t.c1, normalizer, t, "{} {}: c4 == toNFKC(c1) [{}] {}");
        test!(t.c4, t.c2, normalizer, t, "{} {}: c4 == toNFKC(c2) [{}] {}");
        test!(t.c4, t.c3, normalizer, t, "{} {}: c4 == toNFKC(c3) [{}] {}");
        test!(t.c4, t.c4, normalizer, t, "{} {}: c4 == toNFKC(c4) [{}] {}");
        test!(t.c4, t.c5, normalizer, t, "{} {}: c4 == toNFKC(c5) [{}] {}");
    }
}
