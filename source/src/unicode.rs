use crate::properties::*;

/// количество полей в строке UnicodeData.txt
const FIELDS: usize = 15;

/// разбор UnicodeData.txt из UCD
///
/// используются поля 0 (код), 1 (название), 3 (CCC) и 5 (декомпозиция), остальные только
/// подсчитываются. строки диапазонов (<..., First> / <..., Last>) пропускаются: у кодпоинтов
/// диапазонов нет декомпозиции в UnicodeData.txt и CCC равен 0, т.е. совпадает со значениями по умолчанию.
/// слоги хангыль раскладываются алгоритмически
pub fn parse(data: &str) -> Result<Vec<Codepoint>, PropertiesError>
{
    let mut codepoints = vec![];

    for (i, line) in data.lines().enumerate() {
        let line_number = i + 1;

        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let props: Vec<&str> = line.split(';').collect();

        if props.len() != FIELDS {
            return Err(PropertiesError::FieldCount {
                line: line_number,
                expected: FIELDS,
                found: props.len(),
            });
        }

        let error = |e| PropertiesError::value(line_number, e);

        // код и название
        let code = parse_code(props[0]).map_err(error)?;
        let name = props[1].to_owned();

        // границы диапазонов: CJK, хангыль, тангутский, Private Use, суррогаты
        if name.starts_with('<') && (name.ends_with("First>") || name.ends_with("Last>")) {
            log::trace!("строка {}: граница диапазона {} ({:04X})", line_number, name, code);
            continue;
        }

        let ccc = CanonicalCombiningClass::try_from(props[3]).map_err(error)?;
        let decomposition = Decomposition::try_from(props[5]).map_err(error)?;

        codepoints.push(Codepoint {
            code,
            name,
            ccc,
            decomposition_tag: decomposition.tag,
            decomposition: decomposition.codes,
        });
    }

    log::debug!("UnicodeData.txt: кодпоинтов - {}", codepoints.len());

    Ok(codepoints)
}
