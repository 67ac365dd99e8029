use crate::form::NormalizationForm;
use crate::properties::PropertyStore;

/// декомпозиция последовательности кодпоинтов с каноническим упорядочиванием нестартеров
pub fn decompose<P>(properties: &P, form: NormalizationForm, input: &[u32]) -> Vec<u32>
where
    P: PropertyStore + ?Sized,
{
    let mut result = Vec::with_capacity(input.len());
    decompose_into(properties, form, input, &mut result);

    result
}

/// декомпозиция с дописыванием результата в конец буфера
///
/// каждый кодпоинт раскладывается полностью (рекурсивная декомпозиция уже получена источником свойств),
/// затем элементы декомпозиции по одному переносятся в результат:
///  - стартер дописывается в конец
///  - нестартер вставляется перед идущими в конце результата нестартерами с бо́льшим CCC
///
/// т.е. каждая последовательность нестартеров сортируется вставками - устойчиво, нестартеры с одинаковым
/// CCC сохраняют исходный порядок. через стартер нестартер не перемещается никогда
pub fn decompose_into<P>(
    properties: &P,
    form: NormalizationForm,
    input: &[u32],
    result: &mut Vec<u32>,
) where
    P: PropertyStore + ?Sized,
{
    let canonical_only = !form.is_compatibility();

    // в подавляющем большинстве случаев декомпозиция кодпоинта - не длиннее 4 элементов,
    // самая длинная (U+FDFA) - 18
    let mut buffer: Vec<u32> = Vec::with_capacity(18);

    for &code in input {
        buffer.clear();
        properties.decompose_into(canonical_only, code, &mut buffer);

        for &element in buffer.iter() {
            let ccc = properties.combining_class(element);

            if ccc == 0 {
                result.push(element);
                continue;
            }

            let mut position = result.len();

            while position > 0 && properties.combining_class(result[position - 1]) > ccc {
                position -= 1;
            }

            result.insert(position, element);
        }
    }
}
