use std::collections::BTreeMap;
use std::collections::HashMap;

/// размер блока двухуровневой таблицы - 128 кодпоинтов
const BLOCK_BITS: u32 = 7;
const BLOCK_SIZE: usize = 1 << BLOCK_BITS;
const BLOCK_MASK: u32 = BLOCK_SIZE as u32 - 1;

/// классы канонического комбинирования в виде двухуровневой таблицы:
/// индекс блока (code >> 7) указывает на блок из 128 значений. одинаковые блоки хранятся
/// один раз, блок с нулевым индексом - пустой (все кодпоинты - стартеры)
#[derive(Debug, Clone)]
pub struct CombiningClasses
{
    /// индекс блоков
    index: Vec<u16>,
    /// блоки значений, идущие подряд
    data: Vec<u8>,
}

impl CombiningClasses
{
    /// построить таблицу по соответствию кодпоинт -> CCC
    pub fn new(classes: &HashMap<u32, u8>) -> Self
    {
        // сгруппируем ненулевые значения по блокам
        let mut blocks: BTreeMap<usize, [u8; BLOCK_SIZE]> = BTreeMap::new();

        for (&code, &ccc) in classes.iter() {
            if ccc == 0 {
                continue;
            }

            let block = (code >> BLOCK_BITS) as usize;
            let offset = (code & BLOCK_MASK) as usize;

            blocks.entry(block).or_insert([0; BLOCK_SIZE])[offset] = ccc;
        }

        let blocks_count = match blocks.keys().next_back() {
            Some(last) => last + 1,
            None => 0,
        };

        let mut index = vec![0u16; blocks_count];
        let mut data = vec![0u8; BLOCK_SIZE];
        let mut known: HashMap<[u8; BLOCK_SIZE], u16> = HashMap::new();

        known.insert([0; BLOCK_SIZE], 0);

        for (block, values) in blocks {
            let next = (data.len() / BLOCK_SIZE) as u16;

            let position = *known.entry(values).or_insert_with(|| {
                data.extend_from_slice(&values);
                next
            });

            index[block] = position;
        }

        Self { index, data }
    }

    /// CCC кодпоинта. кодпоинты за пределами таблицы - стартеры
    #[inline(always)]
    pub fn get(&self, code: u32) -> u8
    {
        let block = match self.index.get((code >> BLOCK_BITS) as usize) {
            Some(&block) => block as usize,
            None => return 0,
        };

        self.data[(block << BLOCK_BITS) | (code & BLOCK_MASK) as usize]
    }

    /// количество уникальных блоков (включая пустой)
    pub fn blocks(&self) -> usize
    {
        self.data.len() / BLOCK_SIZE
    }
}
