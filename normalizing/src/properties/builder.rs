use std::collections::HashMap;
use std::collections::HashSet;

use super::combining_class::CombiningClasses;
use super::tables::{Decomposition, PropertyTables};
use crate::error::BuildError;
use crate::hangul::decompose_hangul;
use crate::is_scalar_value;

/// сборка таблиц свойств
///
/// данные проверяются сразу: кодпоинты вне диапазона, пустые и повторные декомпозиции
/// отклоняются при добавлении, циклические - при сборке
#[derive(Debug, Clone, Default)]
pub struct PropertyTablesBuilder
{
    classes: HashMap<u32, u8>,
    decompositions: HashMap<u32, Decomposition>,
    exclusions: HashSet<u32>,
}

impl PropertyTablesBuilder
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// класс канонического комбинирования кодпоинта
    pub fn combining_class(&mut self, code: u32, ccc: u8) -> Result<&mut Self, BuildError>
    {
        check_code(code)?;

        match ccc {
            0 => self.classes.remove(&code),
            _ => self.classes.insert(code, ccc),
        };

        Ok(self)
    }

    /// декомпозиция кодпоинта (один уровень, как в UnicodeData.txt)
    pub fn decomposition(
        &mut self,
        code: u32,
        codes: &[u32],
        compatibility: bool,
    ) -> Result<&mut Self, BuildError>
    {
        check_code(code)?;

        if codes.is_empty() {
            return Err(BuildError::EmptyDecomposition(code));
        }

        for &element in codes {
            check_code(element)?;
        }

        if self.decompositions.contains_key(&code) {
            return Err(BuildError::DuplicateDecomposition(code));
        }

        self.decompositions.insert(
            code,
            Decomposition {
                codes: codes.to_vec(),
                compatibility,
            },
        );

        Ok(self)
    }

    /// исключение композиции (CompositionExclusions.txt)
    pub fn exclusion(&mut self, code: u32) -> Result<&mut Self, BuildError>
    {
        check_code(code)?;
        self.exclusions.insert(code);

        Ok(self)
    }

    /// собрать таблицы
    pub fn build(self) -> Result<PropertyTables, BuildError>
    {
        let canonical = self.resolve_all(true)?;
        let compatibility = self.resolve_all(false)?;

        let ccc = |code: u32| self.classes.get(&code).copied().unwrap_or(0);
        let mut exclusions = self.exclusions.clone();

        // синглтоны, нестартеры и декомпозиции, начинающиеся с нестартера,
        // никогда не получаются в результате композиции
        for (&code, decomposition) in self.decompositions.iter() {
            let codes = &decomposition.codes;

            if !decomposition.compatibility && (codes.len() == 1 || ccc(code) != 0 || ccc(codes[0]) != 0) {
                exclusions.insert(code);
            }
        }

        // пары - только для композитов, которые не являются исключениями
        let pairs: HashMap<(u32, u32), u32> = self
            .decompositions
            .iter()
            .filter(|(code, decomposition)| {
                !decomposition.compatibility && decomposition.codes.len() == 2 && !exclusions.contains(*code)
            })
            .map(|(&code, decomposition)| ((decomposition.codes[0], decomposition.codes[1]), code))
            .collect();

        let tables = PropertyTables {
            classes: CombiningClasses::new(&self.classes),
            raw: self.decompositions,
            canonical,
            compatibility,
            pairs,
            exclusions,
        };

        let stats = tables.stats();

        log::debug!(
            "таблицы свойств: блоков CCC - {}, декомпозиций - {} (канонических - {}), пар - {}, исключений - {}",
            stats.class_blocks,
            stats.decompositions,
            stats.canonical_decompositions,
            stats.pairs,
            stats.exclusions
        );

        Ok(tables)
    }

    /// полные декомпозиции всех кодпоинтов, имеющих декомпозицию нужного типа
    fn resolve_all(&self, canonical_only: bool) -> Result<HashMap<u32, Box<[u32]>>, BuildError>
    {
        let mut resolved: HashMap<u32, Vec<u32>> = HashMap::new();
        let mut visiting: HashSet<u32> = HashSet::new();

        for &code in self.decompositions.keys() {
            self.resolve(code, canonical_only, &mut resolved, &mut visiting)?;
        }

        Ok(resolved
            .into_iter()
            .filter(|(code, decomposition)| *decomposition != [*code])
            .map(|(code, decomposition)| (code, decomposition.into_boxed_slice()))
            .collect())
    }

    /// рекурсивная декомпозиция кодпоинта с запоминанием уже полученных результатов
    fn resolve(
        &self,
        code: u32,
        canonical_only: bool,
        resolved: &mut HashMap<u32, Vec<u32>>,
        visiting: &mut HashSet<u32>,
    ) -> Result<Vec<u32>, BuildError>
    {
        if let Some(decomposition) = resolved.get(&code) {
            return Ok(decomposition.clone());
        }

        let decomposition = match self.decompositions.get(&code) {
            Some(decomposition) if !(canonical_only && decomposition.compatibility) => decomposition,
            _ => {
                let mut result = vec![];

                if !decompose_hangul(code, &mut result) {
                    result.push(code);
                }

                return Ok(result);
            }
        };

        if !visiting.insert(code) {
            return Err(BuildError::CyclicDecomposition(code));
        }

        let mut result = Vec::with_capacity(decomposition.codes.len());

        for &element in decomposition.codes.iter() {
            result.extend(self.resolve(element, canonical_only, resolved, visiting)?);
        }

        visiting.remove(&code);
        resolved.insert(code, result.clone());

        Ok(result)
    }
}

/// кодпоинт должен быть скалярным значением Unicode
#[inline]
fn check_code(code: u32) -> Result<(), BuildError>
{
    match is_scalar_value(code) {
        true => Ok(()),
        false => Err(BuildError::CodeOutOfRange(code)),
    }
}
