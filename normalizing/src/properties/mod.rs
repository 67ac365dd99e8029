pub use builder::PropertyTablesBuilder;
pub use tables::Decomposition;
pub use tables::PropertyTables;
pub use tables::TablesStats;

mod builder;
mod combining_class;
mod tables;

/// источник свойств кодпоинтов, необходимых для нормализации
///
/// все методы - тотальные функции: для неизвестных кодпоинтов возвращаются значения по умолчанию
/// (CCC = 0, декомпозиция - сам кодпоинт, композиция отсутствует, исключением не является).
/// источник не изменяется после построения и может разделяться между потоками
pub trait PropertyStore
{
    /// класс канонического комбинирования (0 - стартер)
    fn combining_class(&self, code: u32) -> u8;

    /// дописать в буфер полную (рекурсивную) декомпозицию кодпоинта.
    /// canonical_only - применяются только канонические декомпозиции, декомпозиции совместимости
    /// игнорируются. если декомпозиции нет - в буфер пишется сам кодпоинт
    fn decompose_into(&self, canonical_only: bool, code: u32, buffer: &mut Vec<u32>);

    /// композиция пары кодпоинтов. None - если кодпоинты вне диапазона, пары нет
    /// или результат является исключением композиции
    fn compose(&self, first: u32, second: u32) -> Option<u32>;

    /// является ли кодпоинт исключением композиции?
    fn is_excluded(&self, code: u32) -> bool;

    /// полная декомпозиция кодпоинта
    fn decomposition(&self, canonical_only: bool, code: u32) -> Vec<u32>
    {
        let mut buffer = Vec::with_capacity(4);
        self.decompose_into(canonical_only, code, &mut buffer);

        buffer
    }

    /// кодпоинт является стартером?
    #[inline]
    fn is_starter(&self, code: u32) -> bool
    {
        self.combining_class(code) == 0
    }
}
