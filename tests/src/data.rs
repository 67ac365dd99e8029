use unicode_normalization_source::bundled;
use unicode_normalizing::PropertyTables;

/// таблицы свойств из выдержки UCD
pub fn tables() -> PropertyTables
{
    match bundled() {
        Ok(tables) => tables,
        Err(error) => panic!("выдержка UCD: {}", error),
    }
}

/// кодпоинты строки
pub fn codes(source: &str) -> Vec<u32>
{
    source.chars().map(u32::from).collect()
}

/// кодпоинты в виде, удобном для сообщений об ошибках
pub fn hex(codes: &[u32]) -> String
{
    codes
        .iter()
        .map(|code| format!("{:04X}", code))
        .collect::<Vec<String>>()
        .join(" ")
}
