use thiserror::Error;
use unicode_normalizing::BuildError;

mod canonical_combining_class;
mod decomposition;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;

/// Кодпоинт Unicode - свойства, необходимые для нормализации
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, PartialEq)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
    /// тег декомпозиции
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция
    pub decomposition: Vec<u32>,
}

impl Codepoint
{
    /// стартер?
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.ccc.is_starter()
    }

    /// нестартер?
    #[inline]
    pub fn is_nonstarter(&self) -> bool
    {
        self.ccc.is_non_starter()
    }

    /// декомпозиция совместимости?
    #[inline]
    pub fn is_compatibility(&self) -> bool
    {
        self.decomposition_tag.is_some()
    }
}

/// ошибка разбора значения отдельного поля
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError
{
    #[error("неизвестное значение свойства '{0}'")]
    UnknownPropertyValue(String),

    #[error("некорректный код кодпоинта '{0}'")]
    InvalidCode(String),
}

/// ошибки разбора файлов UCD и построения таблиц
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertiesError
{
    #[error("строка {line}: {source}")]
    Value
    {
        line: usize, source: ValueError
    },

    #[error("строка {line}: ожидалось полей - {expected}, получено - {found}")]
    FieldCount
    {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("построение таблиц свойств: {0}")]
    Build(#[from] BuildError),
}

impl PropertiesError
{
    /// ошибка значения поля в строке файла (нумерация строк - с 1)
    pub fn value(line: usize, source: ValueError) -> Self
    {
        Self::Value { line, source }
    }
}

/// разобрать шестнадцатеричный код кодпоинта
pub fn parse_code(value: &str) -> Result<u32, ValueError>
{
    let value = value.trim();

    u32::from_str_radix(value, 16).map_err(|_| ValueError::InvalidCode(value.to_owned()))
}
