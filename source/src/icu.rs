use icu_normalizer::properties::CanonicalCombiningClassMap;
use icu_normalizer::properties::CanonicalComposition;
use icu_normalizer::ComposingNormalizer;
use icu_normalizer::DecomposingNormalizer;
use unicode_normalizing::PropertyStore;

/// источник свойств на основе скомпилированных данных ICU4X
///
/// полная декомпозиция кодпоинта - результат NFD / NFKD-нормализации строки из одного символа
pub struct IcuProperties
{
    classes: CanonicalCombiningClassMap,
    composition: CanonicalComposition,
    nfd: DecomposingNormalizer,
    nfkd: DecomposingNormalizer,
    nfc: ComposingNormalizer,
}

impl IcuProperties
{
    pub fn new() -> Self
    {
        Self {
            classes: CanonicalCombiningClassMap::new(),
            composition: CanonicalComposition::new(),
            nfd: DecomposingNormalizer::new_nfd(),
            nfkd: DecomposingNormalizer::new_nfkd(),
            nfc: ComposingNormalizer::new_nfc(),
        }
    }
}

impl Default for IcuProperties
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl PropertyStore for IcuProperties
{
    #[inline]
    fn combining_class(&self, code: u32) -> u8
    {
        match char::from_u32(code) {
            Some(c) => self.classes.get(c).0,
            None => 0,
        }
    }

    fn decompose_into(&self, canonical_only: bool, code: u32, buffer: &mut Vec<u32>)
    {
        let Some(c) = char::from_u32(code) else {
            buffer.push(code);
            return;
        };

        let normalizer = match canonical_only {
            true => &self.nfd,
            false => &self.nfkd,
        };

        let mut source = [0; 4];
        let decomposed = normalizer.normalize(c.encode_utf8(&mut source));

        buffer.extend(decomposed.chars().map(u32::from));
    }

    fn compose(&self, first: u32, second: u32) -> Option<u32>
    {
        let first = char::from_u32(first)?;
        let second = char::from_u32(second)?;

        self.composition.compose(first, second).map(u32::from)
    }

    /// кодпоинт с канонической декомпозицией, который не восстанавливается при NFC-нормализации
    fn is_excluded(&self, code: u32) -> bool
    {
        let Some(c) = char::from_u32(code) else {
            return false;
        };

        let mut buffer = [0; 4];
        let source: &str = c.encode_utf8(&mut buffer);

        self.nfd.normalize(source) != source && self.nfc.normalize(source) != source
    }
}
