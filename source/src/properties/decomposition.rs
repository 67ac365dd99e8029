use super::parse_code;
use super::ValueError;

/// декомпозиция
/// берется из UCD: 5 колонка UnicodeData.txt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition
{
    /// декомпозиция
    pub codes: Vec<u32>,
    /// тег декомпозиции
    pub tag: Option<DecompositionTag>,
}

impl TryFrom<&str> for Decomposition
{
    type Error = ValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        let (tag_string, decomposition_string) = match value.starts_with('<') {
            true => value.split_once(' ').unwrap_or((value, "")),
            false => ("", value),
        };

        let tag = match !tag_string.is_empty() {
            true => Some(DecompositionTag::try_from(tag_string)?),
            false => None,
        };

        let codes = decomposition_string
            .split_whitespace()
            .map(parse_code)
            .collect::<Result<Vec<u32>, ValueError>>()?;

        Ok(Self { codes, tag })
    }
}

/// тег декомпозиции
/// берется из UCD: 5 колонка UnicodeData.txt
/// любой тег означает декомпозицию совместимости
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font,
    /// неразрывная версия пробела или дефиса
    NoBreak,
    /// начальная форма представления (арабский)
    Initial,
    /// средняя форма представления (арабский)
    Medial,
    /// конечная форма представления (арабский)
    Final,
    /// изолированная форма представления (арабский)
    Isolated,
    /// окруженная форма
    Circle,
    /// надстрочная форма
    Super,
    /// подстрочная форма
    Sub,
    /// вертикальная форма представления
    Vertical,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow,
    /// малая вариантная форма
    Small,
    /// вариант шрифта в квадрате CJK
    Square,
    /// форма обыкновенной дроби
    Fraction,
    /// неопределенный символ для обеспечения совместимости
    Compat,
}

/// теги в том виде, в котором они записаны в UnicodeData.txt
const TAGS: [(DecompositionTag, &str); 16] = [
    (DecompositionTag::Font, "<font>"),
    (DecompositionTag::NoBreak, "<noBreak>"),
    (DecompositionTag::Initial, "<initial>"),
    (DecompositionTag::Medial, "<medial>"),
    (DecompositionTag::Final, "<final>"),
    (DecompositionTag::Isolated, "<isolated>"),
    (DecompositionTag::Circle, "<circle>"),
    (DecompositionTag::Super, "<super>"),
    (DecompositionTag::Sub, "<sub>"),
    (DecompositionTag::Vertical, "<vertical>"),
    (DecompositionTag::Wide, "<wide>"),
    (DecompositionTag::Narrow, "<narrow>"),
    (DecompositionTag::Small, "<small>"),
    (DecompositionTag::Square, "<square>"),
    (DecompositionTag::Fraction, "<fraction>"),
    (DecompositionTag::Compat, "<compat>"),
];

impl DecompositionTag
{
    /// обозначение тега в UCD
    pub fn abbr(&self) -> &'static str
    {
        TAGS.iter()
            .find(|(tag, _)| tag == self)
            .map_or("<compat>", |(_, abbr)| *abbr)
    }
}

impl TryFrom<&str> for DecompositionTag
{
    type Error = ValueError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        TAGS.iter()
            .find(|(_, value)| *value == abbr)
            .map(|(tag, _)| *tag)
            .ok_or_else(|| ValueError::UnknownPropertyValue(abbr.to_owned()))
    }
}

impl core::fmt::Display for DecompositionTag
{
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.write_str(self.abbr())
    }
}
