use crate::composition::compose;
use crate::decomposition::decompose_into;
use crate::form::NormalizationForm;
use crate::properties::PropertyStore;

/// нормализация последовательности кодпоинтов: декомпозиция, и, если форма того требует, - композиция
///
/// пустая последовательность возвращается сразу, без обращений к источнику свойств
pub fn normalize<P>(properties: &P, form: NormalizationForm, input: &[u32]) -> Vec<u32>
where
    P: PropertyStore + ?Sized,
{
    let mut result = Vec::new();
    normalize_to(properties, form, input, &mut result);

    result
}

/// нормализация с заменой содержимого буфера
fn normalize_to<P>(properties: &P, form: NormalizationForm, input: &[u32], result: &mut Vec<u32>)
where
    P: PropertyStore + ?Sized,
{
    result.clear();

    if input.is_empty() {
        return;
    }

    result.reserve(input.len());
    decompose_into(properties, form, input, result);

    if form.is_composition() {
        let decomposed = core::mem::take(result);
        *result = compose(properties, decomposed);
    }
}

/// нормализатор: форма нормализации + разделяемая ссылка на источник свойств
///
/// источник строится один раз и передаётся во все нормализаторы, сам нормализатор
/// состояния между вызовами не хранит
pub struct Normalizer<'a, P>
where
    P: PropertyStore + ?Sized,
{
    /// форма нормализации
    form: NormalizationForm,
    /// источник свойств кодпоинтов
    properties: &'a P,
}

impl<'a, P> Clone for Normalizer<'a, P>
where
    P: PropertyStore + ?Sized,
{
    fn clone(&self) -> Self
    {
        *self
    }
}

impl<'a, P> Copy for Normalizer<'a, P> where P: PropertyStore + ?Sized {}

impl<'a, P> Normalizer<'a, P>
where
    P: PropertyStore + ?Sized,
{
    pub fn new(form: NormalizationForm, properties: &'a P) -> Self
    {
        Self { form, properties }
    }

    /// NFD-нормализатор
    pub fn nfd(properties: &'a P) -> Self
    {
        Self::new(NormalizationForm::D, properties)
    }

    /// NFC-нормализатор
    pub fn nfc(properties: &'a P) -> Self
    {
        Self::new(NormalizationForm::C, properties)
    }

    /// NFKD-нормализатор
    pub fn nfkd(properties: &'a P) -> Self
    {
        Self::new(NormalizationForm::KD, properties)
    }

    /// NFKC-нормализатор
    pub fn nfkc(properties: &'a P) -> Self
    {
        Self::new(NormalizationForm::KC, properties)
    }

    /// форма нормализации
    pub fn form(&self) -> NormalizationForm
    {
        self.form
    }

    /// нормализация последовательности кодпоинтов
    pub fn normalize_codes(&self, input: &[u32]) -> Vec<u32>
    {
        normalize(self.properties, self.form, input)
    }

    /// нормализация с заменой содержимого буфера - позволяет переиспользовать его между вызовами
    pub fn normalize_into(&self, input: &[u32], result: &mut Vec<u32>)
    {
        normalize_to(self.properties, self.form, input, result)
    }

    /// нормализация строки
    ///
    /// кодпоинт, не являющийся скалярным значением, может появиться только из некорректного
    /// источника свойств - такой кодпоинт записывается как U+FFFD
    pub fn normalize(&self, input: &str) -> String
    {
        if input.is_empty() {
            return String::new();
        }

        let codes: Vec<u32> = input.chars().map(u32::from).collect();

        self.normalize_codes(&codes)
            .into_iter()
            .map(|code| char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// является ли строка нормализованной?
    pub fn is_normalized(&self, input: &str) -> bool
    {
        let codes: Vec<u32> = input.chars().map(u32::from).collect();

        self.normalize_codes(&codes) == codes
    }
}
