use thiserror::Error;

/// ошибки построения таблиц свойств
///
/// нормализация сама по себе ошибок не возвращает - все некорректные данные
/// отсекаются один раз, при сборке таблиц
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError
{
    #[error("кодпоинт U+{0:04X} вне диапазона скалярных значений Unicode")]
    CodeOutOfRange(u32),

    #[error("пустая декомпозиция у кодпоинта U+{0:04X}")]
    EmptyDecomposition(u32),

    #[error("повторная декомпозиция у кодпоинта U+{0:04X}")]
    DuplicateDecomposition(u32),

    #[error("циклическая декомпозиция: U+{0:04X} раскладывается сам в себя")]
    CyclicDecomposition(u32),
}

/// неизвестное название формы нормализации
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("неизвестная форма нормализации: '{0}'")]
pub struct ParseFormError(pub String);
