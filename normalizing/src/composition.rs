use crate::properties::PropertyStore;

/// значение "CCC последнего записанного кодпоинта" в случае, когда последовательность начинается
/// с нестартера - вне диапазона CCC, не даёт ничего скомбинировать с таким нестартером
const LEADING_NONSTARTER: u16 = 256;

/// каноническая композиция декомпозированной и упорядоченной последовательности
///
/// проход слева направо, без возвратов: очередной кодпоинт комбинируется с последним стартером, если
/// пара есть в таблице композиций и между ними нет нестартеров с CCC, большим или равным CCC кодпоинта.
/// результат комбинирования заменяет стартер на его месте и сам может участвовать в дальнейших композициях.
/// буфер используется повторно, результат никогда не длиннее исходной последовательности
pub fn compose<P>(properties: &P, mut buffer: Vec<u32>) -> Vec<u32>
where
    P: PropertyStore + ?Sized,
{
    if buffer.is_empty() {
        return buffer;
    }

    let mut starter_position = 0;
    let mut starter = buffer[0];

    let mut last_ccc = match properties.combining_class(starter) {
        0 => 0,
        _ => LEADING_NONSTARTER,
    };

    // длина уже скомбинированной части
    let mut length = 1;

    for position in 1 .. buffer.len() {
        let code = buffer[position];
        let ccc = properties.combining_class(code) as u16;

        match properties.compose(starter, code) {
            Some(composite) if last_ccc < ccc || last_ccc == 0 => {
                buffer[starter_position] = composite;
                starter = composite;
            }
            _ => {
                if ccc == 0 {
                    starter_position = length;
                    starter = code;
                }

                last_ccc = ccc;
                buffer[length] = code;
                length += 1;
            }
        }
    }

    buffer.truncate(length);
    buffer
}
