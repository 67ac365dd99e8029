use core::fmt;
use core::str::FromStr;

use crate::error::ParseFormError;

/// форма нормализации
///
/// совместимость и композиция - независимые признаки:
///  - D: ни того, ни другого
///  - C: только композиция
///  - KD: только совместимость
///  - KC: и совместимость, и композиция
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizationForm
{
    /// каноническая декомпозиция
    D,
    /// каноническая декомпозиция с последующей канонической композицией
    C,
    /// декомпозиция совместимости
    KD,
    /// декомпозиция совместимости с последующей канонической композицией
    KC,
}

impl NormalizationForm
{
    /// все формы нормализации
    pub const ALL: [Self; 4] = [Self::D, Self::C, Self::KD, Self::KC];

    /// используется декомпозиция совместимости?
    #[inline(always)]
    pub fn is_compatibility(&self) -> bool
    {
        matches!(self, Self::KD | Self::KC)
    }

    /// после декомпозиции требуется композиция?
    #[inline(always)]
    pub fn is_composition(&self) -> bool
    {
        matches!(self, Self::C | Self::KC)
    }

    /// каноническое название формы
    pub fn name(&self) -> &'static str
    {
        match self {
            Self::D => "NFD",
            Self::C => "NFC",
            Self::KD => "NFKD",
            Self::KC => "NFKC",
        }
    }
}

impl fmt::Display for NormalizationForm
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NormalizationForm
{
    type Err = ParseFormError;

    /// регистр не важен, префикс "NF" допускается, но не обязателен
    fn from_str(value: &str) -> Result<Self, Self::Err>
    {
        let upper = value.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("NF").unwrap_or(&upper);

        Ok(match name {
            "D" => Self::D,
            "C" => Self::C,
            "KD" => Self::KD,
            "KC" => Self::KC,
            _ => return Err(ParseFormError(value.to_owned())),
        })
    }
}
