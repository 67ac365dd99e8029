use crate::properties::parse_code;
use crate::properties::PropertiesError;

/// разбор CompositionExclusions.txt из UCD
/// исключения композиции не могут быть вычислены, этот список составляется консорциумом Unicode в ручном режиме.
/// синглтоны и декомпозиции, начинающиеся с нестартера, в файле закомментированы - их вычисляет построитель таблиц
pub fn parse(data: &str) -> Result<Vec<u32>, PropertiesError>
{
    let mut exclusions = vec![];

    for (i, line) in data.lines().enumerate() {
        let code = match line.split_once('#') {
            Some((code, _)) => code,
            None => line,
        }
        .trim();

        if code.is_empty() {
            continue;
        }

        exclusions.push(parse_code(code).map_err(|e| PropertiesError::value(i + 1, e))?);
    }

    log::debug!("CompositionExclusions.txt: исключений - {}", exclusions.len());

    Ok(exclusions)
}
