/// образцы текстов на разных языках - для сравнения с эталонной реализацией и бенчмарков
pub const TEXTS: &[(&str, &str)] = &[
    ("french", include_str!("./../data/texts/french.txt")),
    ("vietnamese", include_str!("./../data/texts/vietnamese.txt")),
    ("korean", include_str!("./../data/texts/korean.txt")),
    ("greek", include_str!("./../data/texts/greek.txt")),
    ("hindi", include_str!("./../data/texts/hindi.txt")),
    ("russian", include_str!("./../data/texts/russian.txt")),
    ("mixed", include_str!("./../data/texts/mixed.txt")),
];

/// текст по названию
pub fn text(name: &str) -> Option<&'static str>
{
    TEXTS
        .iter()
        .find(|(text_name, _)| *text_name == name)
        .map(|(_, text)| *text)
}
