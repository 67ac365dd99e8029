pub use composition::compose;
pub use decomposition::decompose;
pub use decomposition::decompose_into;
pub use error::BuildError;
pub use error::ParseFormError;
pub use form::NormalizationForm;
pub use normalizer::normalize;
pub use normalizer::Normalizer;
pub use properties::Decomposition;
pub use properties::PropertyStore;
pub use properties::PropertyTables;
pub use properties::PropertyTablesBuilder;
pub use properties::TablesStats;

pub mod hangul;
pub mod properties;

mod composition;
mod decomposition;
mod error;
mod form;
mod normalizer;

/// последний допустимый кодпоинт Unicode
pub const LAST_CODEPOINT: u32 = 0x10FFFF;

/// кодпоинт не выходит за пределы диапазона Unicode
#[inline(always)]
pub fn is_valid_code(code: u32) -> bool
{
    code <= LAST_CODEPOINT
}

/// кодпоинт является скалярным значением Unicode (в диапазоне и не суррогат)
#[inline(always)]
pub fn is_scalar_value(code: u32) -> bool
{
    is_valid_code(code) && !(0xD800 ..= 0xDFFF).contains(&code)
}
