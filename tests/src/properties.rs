use icu_normalizer::ComposingNormalizer;
use icu_normalizer::DecomposingNormalizer;
use quickcheck::{Arbitrary, Gen};
use unicode_normalization_source::IcuProperties;
use unicode_normalizing::{compose, NormalizationForm, Normalizer, PropertyStore};

use crate::data::{codes, hex, tables};

/// символы, все свойства которых есть в выдержке UCD: стартеры, нестартеры, синглтоны,
/// исключения, хангыль, символы вне BMP
const POOL: &[char] = &[
    'a', 'c', 'd', 'e', 'o', 's', 'A', '\u{300}', '\u{301}', '\u{302}', '\u{303}', '\u{307}',
    '\u{308}', '\u{30A}', '\u{31B}', '\u{323}', '\u{327}', '\u{345}', '\u{341}', '\u{344}',
    '\u{E9}', '\u{F1}', '\u{C5}', '\u{17F}', '\u{1E9B}', '\u{1E69}', '\u{1EC7}', '\u{1EDB}',
    '\u{212B}', '\u{2126}', '\u{915}', '\u{93C}', '\u{958}', '\u{1100}', '\u{1161}', '\u{11A8}',
    '\u{AC00}', '\u{AC01}', '\u{1D157}', '\u{1D165}', '\u{1D15E}', '\u{FB01}', '\u{BD}',
];

/// строка, насыщенная нестартерами и символами с декомпозициями
#[derive(Debug, Clone)]
struct Marked(String);

impl Arbitrary for Marked
{
    fn arbitrary(g: &mut Gen) -> Self
    {
        let length = usize::arbitrary(g) % (g.size() + 1);

        Marked((0 .. length).filter_map(|_| g.choose(POOL).copied()).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>>
    {
        Box::new(self.0.shrink().map(Marked))
    }
}

/// канонический порядок: нестартер не следует за нестартером с бо́льшим CCC
fn is_canonical_order<P: PropertyStore>(properties: &P, codes: &[u32]) -> bool
{
    codes.windows(2).all(|pair| {
        let ccc = properties.combining_class(pair[1]);

        ccc == 0 || properties.combining_class(pair[0]) <= ccc
    })
}

quickcheck::quickcheck! {
    fn idempotence(source: Marked) -> bool
    {
        let tables = tables();

        NormalizationForm::ALL.iter().all(|&form| {
            let normalizer = Normalizer::new(form, &tables);
            let once = normalizer.normalize(&source.0);

            normalizer.normalize(&once) == once
        })
    }

    fn idempotence_arbitrary(source: String) -> bool
    {
        let tables = tables();

        NormalizationForm::ALL.iter().all(|&form| {
            let normalizer = Normalizer::new(form, &tables);
            let once = normalizer.normalize(&source);

            normalizer.is_normalized(&once)
        })
    }

    fn canonical_order(source: Marked) -> bool
    {
        let tables = tables();

        [NormalizationForm::D, NormalizationForm::KD].iter().all(|&form| {
            let decomposed = Normalizer::new(form, &tables).normalize_codes(&codes(&source.0));

            is_canonical_order(&tables, &decomposed)
        })
    }

    fn decomposition_is_complete(source: Marked) -> bool
    {
        let tables = tables();
        let decomposed = Normalizer::nfd(&tables).normalize_codes(&codes(&source.0));

        decomposed.iter().all(|&code| tables.decomposition(true, code) == [code])
    }

    fn composition_preserves_equivalence(source: Marked) -> bool
    {
        let tables = tables();
        let nfd = Normalizer::nfd(&tables);
        let nfc = Normalizer::nfc(&tables);

        nfd.normalize(&nfc.normalize(&source.0)) == nfd.normalize(&source.0)
            && nfc.normalize(&nfd.normalize(&source.0)) == nfc.normalize(&source.0)
    }

    fn bundled_nfd_equals_icu(source: Marked) -> bool
    {
        let tables = tables();

        Normalizer::nfd(&tables).normalize(&source.0) == DecomposingNormalizer::new_nfd().normalize(&source.0)
    }

    fn icu_properties_equal_icu(source: String) -> bool
    {
        equals_icu(&source)
    }

    fn icu_properties_equal_icu_marked(source: Marked) -> bool
    {
        equals_icu(&source.0)
    }
}

/// все четыре формы на свойствах ICU совпадают с нормализаторами ICU
fn equals_icu(source: &str) -> bool
{
    let properties = IcuProperties::new();

    Normalizer::nfd(&properties).normalize(source) == DecomposingNormalizer::new_nfd().normalize(source)
        && Normalizer::nfc(&properties).normalize(source) == ComposingNormalizer::new_nfc().normalize(source)
        && Normalizer::nfkd(&properties).normalize(source) == DecomposingNormalizer::new_nfkd().normalize(source)
        && Normalizer::nfkc(&properties).normalize(source) == ComposingNormalizer::new_nfkc().normalize(source)
}

#[test]
fn e_acute()
{
    let tables = tables();

    assert_eq!(Normalizer::nfc(&tables).normalize("e\u{301}"), "\u{E9}");
    assert_eq!(Normalizer::nfd(&tables).normalize("e\u{301}"), "e\u{301}");
}

#[test]
fn n_tilde()
{
    let tables = tables();

    assert_eq!(Normalizer::nfd(&tables).normalize("\u{F1}"), "n\u{303}");
    assert_eq!(Normalizer::nfc(&tables).normalize("n\u{303}"), "\u{F1}");
}

#[test]
fn composed_text_round_trip()
{
    let tables = tables();
    let nfc = Normalizer::nfc(&tables);

    for source in ["\u{E9}t\u{E9}", "\u{1E69}\u{1EC7}\u{1EDB}", "\u{AC00}\u{AC01}", "\u{C5}\u{F1}"] {
        assert!(nfc.is_normalized(source), "{}", hex(&codes(source)));
    }
}

#[test]
fn exclusions()
{
    let tables = tables();
    let nfc = Normalizer::nfc(&tables);

    // синглтоны
    assert_eq!(nfc.normalize_codes(&[0x2126]), [0x03A9]);
    assert_eq!(nfc.normalize_codes(&[0x212B]), [0x00C5]);
    assert_eq!(nfc.normalize_codes(&[0x0341]), [0x0301]);

    // исключение для письменности
    assert_eq!(nfc.normalize_codes(&[0x0958]), [0x0915, 0x093C]);
    assert_eq!(nfc.normalize_codes(&[0x0915, 0x093C]), [0x0915, 0x093C]);

    // исключение вне BMP
    assert_eq!(nfc.normalize_codes(&[0x1D15E]), [0x1D157, 0x1D165]);

    // декомпозиция, начинающаяся с нестартера
    assert_eq!(nfc.normalize_codes(&[0x0344]), [0x0308, 0x0301]);
}

#[test]
fn ordering_guard()
{
    let tables = tables();

    // стартер, затем нестартер с бо́льшим CCC, затем с меньшим - композиция с последним заблокирована
    assert_eq!(compose(&tables, vec![0x0064, 0x0301, 0x0323]), [0x0064, 0x0301, 0x0323]);

    // после нормализации порядок канонический, и точка снизу комбинируется
    assert_eq!(
        Normalizer::nfc(&tables).normalize_codes(&[0x0064, 0x0301, 0x0323]),
        [0x1E0D, 0x0301]
    );
}

#[test]
fn canonical_order_of_bundled_tests()
{
    let tables = tables();

    for test in unicode_normalization_source::NORMALIZATION_TESTS.iter() {
        assert!(is_canonical_order(&tables, &test.c3), "{}", hex(&test.c3));
        assert!(is_canonical_order(&tables, &test.c5), "{}", hex(&test.c5));
    }
}
