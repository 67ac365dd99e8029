use std::collections::HashMap;
use std::collections::HashSet;

use super::combining_class::CombiningClasses;
use super::PropertyStore;
use crate::hangul::{compose_hangul, decompose_hangul};
use crate::is_valid_code;

/// декомпозиция кодпоинта в том виде, в котором она задана источником (без рекурсии)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition
{
    /// элементы декомпозиции
    pub codes: Vec<u32>,
    /// декомпозиция совместимости (в UCD - с тегом форматирования)
    pub compatibility: bool,
}

/// таблицы свойств кодпоинтов, хранящиеся в памяти
///
/// строятся один раз с помощью PropertyTablesBuilder, после этого не изменяются
#[derive(Debug, Clone)]
pub struct PropertyTables
{
    /// классы канонического комбинирования
    pub(super) classes: CombiningClasses,
    /// исходные декомпозиции
    pub(super) raw: HashMap<u32, Decomposition>,
    /// полные канонические декомпозиции
    pub(super) canonical: HashMap<u32, Box<[u32]>>,
    /// полные декомпозиции совместимости (включая канонические)
    pub(super) compatibility: HashMap<u32, Box<[u32]>>,
    /// пары для композиции
    pub(super) pairs: HashMap<(u32, u32), u32>,
    /// исключения композиции (полные, т.е. с учетом синглтонов и нестартеров)
    pub(super) exclusions: HashSet<u32>,
}

/// размеры таблиц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablesStats
{
    /// уникальных блоков таблицы CCC
    pub class_blocks: usize,
    /// кодпоинтов с декомпозицией
    pub decompositions: usize,
    /// из них - канонических
    pub canonical_decompositions: usize,
    /// пар композиции
    pub pairs: usize,
    /// исключений композиции
    pub exclusions: usize,
}

impl PropertyTables
{
    /// декомпозиция кодпоинта в исходном виде
    pub fn raw_decomposition(&self, code: u32) -> Option<&Decomposition>
    {
        self.raw.get(&code)
    }

    /// размеры таблиц
    pub fn stats(&self) -> TablesStats
    {
        TablesStats {
            class_blocks: self.classes.blocks(),
            decompositions: self.raw.len(),
            canonical_decompositions: self.canonical.len(),
            pairs: self.pairs.len(),
            exclusions: self.exclusions.len(),
        }
    }
}

impl PropertyStore for PropertyTables
{
    #[inline]
    fn combining_class(&self, code: u32) -> u8
    {
        self.classes.get(code)
    }

    #[inline]
    fn decompose_into(&self, canonical_only: bool, code: u32, buffer: &mut Vec<u32>)
    {
        if decompose_hangul(code, buffer) {
            return;
        }

        let table = match canonical_only {
            true => &self.canonical,
            false => &self.compatibility,
        };

        match table.get(&code) {
            Some(decomposition) => buffer.extend_from_slice(decomposition),
            None => buffer.push(code),
        }
    }

    #[inline]
    fn compose(&self, first: u32, second: u32) -> Option<u32>
    {
        if !is_valid_code(first) || !is_valid_code(second) {
            return None;
        }

        if let Some(code) = compose_hangul(first, second) {
            return Some(code);
        }

        match self.pairs.get(&(first, second)) {
            Some(&code) if !self.exclusions.contains(&code) => Some(code),
            _ => None,
        }
    }

    #[inline]
    fn is_excluded(&self, code: u32) -> bool
    {
        self.exclusions.contains(&code)
    }
}
